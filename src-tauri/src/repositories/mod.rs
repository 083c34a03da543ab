// Repository Pattern実装
// 永続化の責務をここに集約

pub mod title_history_repository;

pub use title_history_repository::{SqliteTitleHistoryRepository, TitleHistoryRepository};

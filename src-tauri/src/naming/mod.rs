// File name engine: catalog lookup, selection state and composition
// Pure logic only; persistence and the UI bridge live outside this module

pub mod catalog;
pub mod composer;
pub mod date_token;
pub mod selection;
pub mod slot;

pub use catalog::{Catalog, MediaArt, NameOption};
pub use composer::{compose, ComposedName, NameToken, ValidationFailure};
pub use selection::Selection;
pub use slot::AttributeSlot;

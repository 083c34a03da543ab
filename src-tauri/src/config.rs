// Configuration constants for the File Name Builder
// All delimiters, formats and storage names live here so the engine and the commands agree on them

/// Application configuration constants
pub mod app {
    /// Name of the application data directory
    pub const DATA_DIR_NAME: &str = "FileName_Builder";

    /// Title history database file name
    pub const DATABASE_FILENAME: &str = "file_name_builder.db";

    /// Optional catalog override read at startup
    pub const CATALOG_FILENAME: &str = "catalog.json";

    /// Default log filter when RUST_LOG is not set
    pub const DEFAULT_LOG_FILTER: &str = "info";
}

/// File name composition constants
pub mod naming {
    /// Separator between tokens
    pub const DELIMITER: char = '_';

    /// Replacement for a delimiter found inside an option value
    pub const DELIMITER_REPLACEMENT: char = '-';

    /// Date token format (YYMMDD)
    pub const DATE_TOKEN_FORMAT: &str = "%y%m%d";

    /// Format produced by an HTML date input
    pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

    /// Additional separated input formats accepted for the date field
    pub const ALTERNATE_DATE_INPUT_FORMATS: &[&str] = &["%d.%m.%Y"];

    /// Compact YYYYMMDD input
    pub const COMPACT_DATE_PATTERN: &str = r"^(\d{4})(\d{2})(\d{2})$";
}

/// Title history constants
pub mod history {
    /// Number of suggestions returned when the caller gives no limit
    pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

    /// Upper bound for a caller supplied limit
    pub const MAX_SUGGESTION_LIMIT: usize = 100;

    /// Use count of a freshly recorded title
    pub const INITIAL_USE_COUNT: i64 = 1;
}

/// Common test values (for test files only)
#[cfg(test)]
pub mod test_values {
    /// Date input used by the reference scenario
    pub const TEST_DATE_INPUT: &str = "2025-03-14";

    /// Expected token for TEST_DATE_INPUT
    pub const TEST_DATE_TOKEN: &str = "250314";

    /// Reference title
    pub const TEST_TITLE: &str = "ISH2025";

    /// Media art keys
    pub const TEST_MEDIA_LAYOUT: &str = "layout";
    pub const TEST_MEDIA_VIDEO: &str = "video";
    pub const TEST_MEDIA_DRAWING: &str = "drawing";
    pub const TEST_MEDIA_IMAGE: &str = "image";

    /// Reference composed name
    pub const TEST_FILE_NAME: &str = "250314_lay_ISH2025_BRO_gen";
}

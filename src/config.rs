use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DATABASE_FILE: &str = "catalog.duckdb";

/// Page size used by list queries when the caller gives no limit.
pub const DEFAULT_PAGE_SIZE: usize = 100;
/// Upper bound on a caller-supplied list limit.
pub const MAX_PAGE_SIZE: usize = 1000;

/// Longest `card_faces` / `related_cards` array accepted before element checks run.
pub const MAX_NESTED_RECORDS: usize = 64;
/// Longest mana cost string accepted before tokenizing.
pub const MAX_MANA_COST_LEN: usize = 256;

pub const SETS_TABLE: &str = "sets";
pub const CARDS_TABLE: &str = "cards";

pub fn default_database_path() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("mtg-catalog").join(DATABASE_FILE)
    } else {
        PathBuf::from(".mtg-catalog").join(DATABASE_FILE)
    }
}

/// Clamp a requested page size into `1..=MAX_PAGE_SIZE`.
pub fn page_size(requested: Option<usize>) -> usize {
    requested
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE)
}

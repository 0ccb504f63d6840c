/// Smallest page the marketplace accepts for listing queries
pub const MIN_PAGE_SIZE: u32 = 1;

/// Largest page size we ask the marketplace for
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Levels accepted in `[logging] level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

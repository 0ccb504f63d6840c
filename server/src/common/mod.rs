pub mod errors;

pub use errors::{ColorError, ColorQueryError, KvError, MarketplaceError};

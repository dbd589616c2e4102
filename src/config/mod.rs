pub mod load;
pub mod types;

pub use types::{Config, DEFAULT_MANIFEST_FILE_NAME, Settings};

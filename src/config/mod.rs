//! Configuration record loading
//!
//! Decodes a JSON object with `database_url`, `api_key` and `max_retries`
//! into a [`ConfigRecord`]. Absent fields stay at their zero value.

pub mod loader;
pub mod record;

pub use loader::{load_config, save_config};
pub use record::ConfigRecord;

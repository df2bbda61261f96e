//! Config record rendering.

use anyhow::Result;

use super::OutputFormat;
use crate::config::ConfigRecord;

/// Render `record` for stdout. The result always ends with a newline.
pub fn render_config(record: &ConfigRecord, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Config: {{database_url: {:?}, api_key: {:?}, max_retries: {}}}\n",
            record.database_url, record.api_key, record.max_retries
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)? + "\n"),
    }
}

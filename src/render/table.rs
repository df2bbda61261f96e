//! Table rendering.

use anyhow::Result;

use super::OutputFormat;

/// Render rows for stdout.
///
/// Text output prints one bracketed row per line with cells separated by a
/// single space, e.g. `[a b c]`.
pub fn render_table(rows: &[Vec<String>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for row in rows {
                out.push('[');
                out.push_str(&row.join(" "));
                out.push_str("]\n");
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)? + "\n"),
    }
}

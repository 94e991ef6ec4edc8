//! Corpus loading. The corpus is a JSON array of card records exported from
//! the product spreadsheet.

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::models::Record;

/// Read every record from `path`. A missing file, malformed JSON or an empty
/// array is an error: the service cannot start without a corpus.
pub fn load(path: &Path) -> Result<Vec<Record>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file {}", path.display()))?;
    let records = parse(&data).with_context(|| format!("Invalid corpus file {}", path.display()))?;
    tracing::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse a JSON corpus.
pub fn parse(data: &str) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_str(data).context("Failed to parse corpus JSON")?;
    if records.is_empty() {
        bail!("Corpus contains no records");
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_order() {
        let records = parse(
            r#"[{"cardTitle": "First", "bankName": "A"},
                {"cardTitle": "Second", "bankName": "B"}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "First");
        assert_eq!(records[1].bank_name, "B");
    }

    #[test]
    fn test_parse_rejects_empty_and_garbage() {
        assert!(parse("[]").is_err());
        assert!(parse("{not json").is_err());
        assert!(parse(r#"{"cardTitle": "x"}"#).is_err());
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = load(Path::new("/nonexistent/cards.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/cards.json"));
    }
}

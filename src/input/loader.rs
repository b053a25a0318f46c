//! URL list loading from JSON or CSV files

use crate::{LoadError, LoadResult};
use std::path::Path;

/// Loads URLs from a JSON or CSV file
///
/// JSON input is a flat array of strings:
///
/// ```json
/// ["https://example.com", "https://example.org"]
/// ```
///
/// CSV input must have a column literally named `url`:
///
/// ```csv
/// url
/// https://example.com
/// https://example.org
/// ```
///
/// URLs are taken verbatim; no normalization or deduplication happens here.
///
/// # Arguments
///
/// * `path` - Path to the input file; the extension selects the format
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The URLs in file order
/// * `Err(LoadError)` - Missing file, unsupported extension, or malformed content
pub fn load_urls(path: &Path) -> LoadResult<Vec<String>> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => load_json(path),
        Some("csv") => load_csv(path),
        _ => Err(LoadError::UnsupportedFormat(path.display().to_string())),
    }
}

fn load_json(path: &Path) -> LoadResult<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    let urls: Vec<String> = serde_json::from_str(&content)?;
    Ok(urls)
}

fn load_csv(path: &Path) -> LoadResult<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;

    let url_column = reader
        .headers()?
        .iter()
        .position(|header| header == "url")
        .ok_or(LoadError::MissingUrlColumn)?;

    let mut urls = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        // A row shorter than the header is malformed, not skippable
        let value = record
            .get(url_column)
            .ok_or(LoadError::MissingUrlField(row as u64 + 1))?;
        urls.push(value.to_string());
    }

    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;
    use tempfile::NamedTempFile;

    fn create_temp_input(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_json_array() {
        let file = create_temp_input(
            ".json",
            r#"["https://example.com", "https://example.org/page"]"#,
        );

        let urls = load_urls(file.path()).unwrap();
        assert_eq!(
            urls,
            vec!["https://example.com", "https://example.org/page"]
        );
    }

    #[test]
    fn test_load_json_rejects_non_array() {
        let file = create_temp_input(".json", r#"{"url": "https://example.com"}"#);

        let result = load_urls(file.path());
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn test_load_json_rejects_malformed() {
        let file = create_temp_input(".json", "not json at all [");

        let result = load_urls(file.path());
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn test_load_csv_with_url_column() {
        let file = create_temp_input(
            ".csv",
            "name,url\nhome,https://example.com\ndocs,https://example.com/docs\n",
        );

        let urls = load_urls(file.path()).unwrap();
        assert_eq!(urls, vec!["https://example.com", "https://example.com/docs"]);
    }

    #[test]
    fn test_load_csv_missing_url_column() {
        let file = create_temp_input(".csv", "name,address\nhome,https://example.com\n");

        let result = load_urls(file.path());
        assert!(matches!(result, Err(LoadError::MissingUrlColumn)));
    }

    #[test]
    fn test_load_csv_short_record_rejected() {
        // Second row has no value under the 'url' column
        let file = create_temp_input(".csv", "name,url\nhome,https://example.com\norphan\n");

        let result = load_urls(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_urls_preserves_order_and_text() {
        // No normalization: trailing slashes and casing stay as written
        let file = create_temp_input(
            ".json",
            r#"["https://B.example.com/", "https://a.example.com"]"#,
        );

        let urls = load_urls(file.path()).unwrap();
        assert_eq!(urls[0], "https://B.example.com/");
        assert_eq!(urls[1], "https://a.example.com");
    }

    #[test]
    fn test_unsupported_extension() {
        let file = create_temp_input(".txt", "https://example.com\n");

        let result = load_urls(file.path());
        assert!(matches!(result, Err(LoadError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_urls(Path::new("/nonexistent/urls.json"));
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }
}

//! Reading and writing the vergrabber.json catalog format
//!
//! The document is a JSON object of categories, each mapping product names
//! to version axes, each holding one release record:
//!
//! ```json
//! {
//!   "signature": "...",
//!   "updated": "2021-08-23",
//!   "client": {
//!     "Mozilla Firefox": {
//!       "91.0": { "version": "91.0.2", "stable": true, "latest": true,
//!                 "released": "2021-08-24", "ends": "2021-09-07" }
//!     }
//!   }
//! }
//! ```
//!
//! Top-level entries that are not objects are metadata, not categories.

use crate::ports::outbound::CatalogDocument;
use crate::release_matching::domain::{CatalogTree, ReleaseRecord};
use crate::shared::error::UpdateCheckError;
use crate::shared::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const UPDATED_KEY: &str = "updated";
const UPDATED_FORMAT: &str = "%Y-%m-%d";

/// Record as stored in the feed; any field may be missing or `null`
#[derive(Debug, Default, Deserialize, Serialize)]
struct RawRecord {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    stable: Option<bool>,
    #[serde(default)]
    latest: Option<bool>,
    #[serde(default)]
    released: Option<String>,
    #[serde(default)]
    ends: Option<String>,
    #[serde(default)]
    edition: Option<String>,
    #[serde(default)]
    product: Option<String>,
}

impl From<RawRecord> for ReleaseRecord {
    fn from(raw: RawRecord) -> Self {
        Self {
            product: raw.product.unwrap_or_default(),
            major_release: String::new(),
            version: raw.version.unwrap_or_default(),
            stable: raw.stable.unwrap_or_default(),
            latest: raw.latest.unwrap_or_default(),
            released: raw.released.unwrap_or_default(),
            ends: raw.ends.unwrap_or_default(),
            edition: raw.edition.unwrap_or_default(),
        }
    }
}

impl From<&ReleaseRecord> for RawRecord {
    fn from(record: &ReleaseRecord) -> Self {
        let text = |value: &str| (!value.is_empty()).then(|| value.to_string());
        Self {
            version: text(&record.version),
            stable: Some(record.stable),
            latest: Some(record.latest),
            released: text(&record.released),
            ends: text(&record.ends),
            edition: text(&record.edition),
            product: text(&record.product),
        }
    }
}

/// Parses a vergrabber.json document
///
/// `source_name` (URL or path) only appears in error messages.
///
/// # Errors
/// Returns `CatalogParseError` if the content is not a JSON object or a
/// record has the wrong shape.
pub fn parse_document(content: &str, source_name: &str) -> Result<CatalogDocument> {
    let parse_error = |details: String| UpdateCheckError::CatalogParseError {
        source_name: source_name.to_string(),
        details,
    };

    let root: Value = serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
    let Value::Object(root) = root else {
        return Err(parse_error("top-level value is not a JSON object".to_string()).into());
    };

    let updated = root
        .get(UPDATED_KEY)
        .and_then(Value::as_str)
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), UPDATED_FORMAT).ok());

    let mut tree = CatalogTree::new();
    for (category, products) in root {
        let Value::Object(products) = products else {
            continue;
        };

        let category_entry = tree.entry(category.clone()).or_default();
        for (product, axes) in products {
            let Value::Object(axes) = axes else {
                continue;
            };

            let product_entry = category_entry.entry(product.clone()).or_default();
            for (axis, record) in axes {
                if !record.is_object() {
                    continue;
                }
                let raw: RawRecord = serde_json::from_value(record).map_err(|e| {
                    parse_error(format!("{category} / {product} / {axis}: {e}"))
                })?;
                product_entry.insert(axis, raw.into());
            }
        }
    }

    Ok(CatalogDocument::new(updated, tree))
}

/// Serializes a catalog back into vergrabber.json form
///
/// # Errors
/// Returns an error if JSON serialization fails
pub fn render_document(document: &CatalogDocument) -> Result<String> {
    let mut root = Map::new();
    if let Some(updated) = document.updated {
        root.insert(
            UPDATED_KEY.to_string(),
            Value::String(updated.format(UPDATED_FORMAT).to_string()),
        );
    }

    for (category, products) in &document.tree {
        let mut product_map = Map::new();
        for (product, axes) in products {
            let mut axis_map = Map::new();
            for (axis, record) in axes {
                axis_map.insert(axis.clone(), serde_json::to_value(RawRecord::from(record))?);
            }
            product_map.insert(product.clone(), Value::Object(axis_map));
        }
        root.insert(category.clone(), Value::Object(product_map));
    }

    Ok(serde_json::to_string_pretty(&Value::Object(root))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "signature": "abc",
        "updated": "2021-08-23",
        "latest": {
            "Mozilla Firefox": "91.0.2"
        },
        "client": {
            "Mozilla Firefox": {
                "91.0": {
                    "version": "91.0.2",
                    "stable": true,
                    "latest": true,
                    "released": "2021-08-24",
                    "ends": null,
                    "product": "Firefox"
                },
                "78.13": {
                    "version": "78.13.0",
                    "stable": true,
                    "latest": false,
                    "edition": "ESR"
                }
            }
        },
        "server": {
            "OpenSSH": {
                "8.7": { "version": "8.7p1" }
            }
        }
    }"#;

    #[test]
    fn test_parse_document() {
        let doc = parse_document(SAMPLE, "sample").unwrap();

        assert_eq!(doc.updated, NaiveDate::from_ymd_opt(2021, 8, 23));
        let firefox = &doc.tree["client"]["Mozilla Firefox"]["91.0"];
        assert_eq!(firefox.version, "91.0.2");
        assert!(firefox.stable);
        assert!(firefox.latest);
        assert_eq!(firefox.released, "2021-08-24");
        assert_eq!(firefox.ends, "");
        assert_eq!(firefox.product, "Firefox");

        let esr = &doc.tree["client"]["Mozilla Firefox"]["78.13"];
        assert_eq!(esr.edition, "ESR");
        assert!(!esr.latest);

        assert_eq!(doc.tree["server"]["OpenSSH"]["8.7"].version, "8.7p1");
    }

    #[test]
    fn test_metadata_entries_are_not_categories() {
        let doc = parse_document(SAMPLE, "sample").unwrap();
        assert!(!doc.tree.contains_key("signature"));
        assert!(!doc.tree.contains_key("updated"));
        // "latest" is an object, but its products hold plain strings
        assert!(doc.tree["latest"].is_empty());
    }

    #[test]
    fn test_missing_or_malformed_updated_date() {
        let doc = parse_document(r#"{"client": {}}"#, "sample").unwrap();
        assert!(doc.updated.is_none());

        let doc = parse_document(r#"{"updated": "yesterday"}"#, "sample").unwrap();
        assert!(doc.updated.is_none());
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_document("not json", "https://example.invalid/v.json").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to parse release catalog"));
        assert!(message.contains("https://example.invalid/v.json"));
    }

    #[test]
    fn test_non_object_root() {
        assert!(parse_document("[1, 2]", "sample").is_err());
    }

    #[test]
    fn test_wrong_field_type() {
        let content = r#"{"client": {"X": {"1": {"stable": "yes"}}}}"#;
        let err = parse_document(content, "sample").unwrap_err();
        assert!(err.to_string().contains("client / X / 1"));
    }

    #[test]
    fn test_render_then_parse_keeps_catalog() {
        let doc = parse_document(SAMPLE, "sample").unwrap();
        let rendered = render_document(&doc).unwrap();
        let reparsed = parse_document(&rendered, "rendered").unwrap();

        assert_eq!(reparsed.updated, doc.updated);
        assert_eq!(
            reparsed.tree["client"]["Mozilla Firefox"],
            doc.tree["client"]["Mozilla Firefox"]
        );
    }
}

//! Offline repair of JavaScript-wrapped boundary files.
//!
//! Some upstream boundary exports ship as `const regions = {...};` modules
//! instead of JSON. Repair strips everything outside the outermost braces
//! and re-serializes the object as pretty-printed JSON. The object itself
//! must already be strict JSON; nothing is evaluated.

use std::path::Path;

use crate::GeoError;
use crate::label::feature_label;
use crate::loader::parse_feature_collection;

/// Returns the text between the first `{` and the last `}` inclusive.
#[must_use]
pub fn extract_object_literal(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    (start < end).then(|| &content[start..=end])
}

/// Converts a possibly-wrapped boundary document into pretty-printed JSON.
///
/// # Errors
///
/// Returns [`GeoError::InvalidCollection`] if no object braces are found,
/// or [`GeoError::Json`] if the extracted object is not strict JSON.
pub fn repair_document(content: &str) -> Result<String, GeoError> {
    let literal = extract_object_literal(content).ok_or_else(|| GeoError::InvalidCollection {
        message: "could not find GeoJSON object boundaries".to_string(),
    })?;

    let value: serde_json::Value = serde_json::from_str(literal)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Repairs `input` and writes the result to `output` (which may be the
/// same path). Returns the number of features in the repaired collection.
///
/// # Errors
///
/// Returns [`GeoError`] if reading, repairing, validating, or writing
/// fails.
pub fn repair_file(input: &Path, output: &Path) -> Result<usize, GeoError> {
    let content = std::fs::read_to_string(input)?;
    let repaired = repair_document(&content)?;
    let collection = parse_feature_collection(&repaired, &input.display().to_string())?;

    std::fs::write(output, repaired)?;
    log::info!(
        "Repaired {} -> {} ({} features)",
        input.display(),
        output.display(),
        collection.features.len()
    );

    Ok(collection.features.len())
}

/// Reads a boundary file (wrapped or not) and returns the label of every
/// feature, in file order.
///
/// # Errors
///
/// Returns [`GeoError`] if the file cannot be read or parsed.
pub fn inspect_labels(path: &Path) -> Result<Vec<String>, GeoError> {
    let content = std::fs::read_to_string(path)?;
    let repaired = repair_document(&content)?;
    let collection = parse_feature_collection(&repaired, &path.display().to_string())?;

    Ok(collection
        .features
        .iter()
        .map(|f| feature_label(f.properties.as_ref()).to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_javascript_wrapper() {
        let js = r#"const regions = {"type": "FeatureCollection", "features": []};
"#;
        let repaired = repair_document(js).unwrap();
        let value: serde_json::Value = serde_json::from_str(&repaired).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert!(value["features"].as_array().unwrap().is_empty());
    }

    #[test]
    fn plain_json_is_unchanged_in_meaning() {
        let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{"name":"A"},"geometry":null}]}"#;
        let repaired = repair_document(json).unwrap();
        let before: serde_json::Value = serde_json::from_str(json).unwrap();
        let after: serde_json::Value = serde_json::from_str(&repaired).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn refuses_non_json_object_literals() {
        let js = "export default { type: 'FeatureCollection', features: [], };";
        assert!(matches!(repair_document(js), Err(GeoError::Json(_))));
    }

    #[test]
    fn missing_braces_is_an_error() {
        assert!(matches!(
            repair_document("const regions = null;"),
            Err(GeoError::InvalidCollection { .. })
        ));
        assert_eq!(extract_object_literal("} backwards {"), None);
    }
}

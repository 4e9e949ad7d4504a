//! Strict `GeoJSON` boundary file loading.
//!
//! Files must be plain JSON `FeatureCollection` documents. JavaScript
//! wrappers (`const regions = {...};`) are rejected here; run them through
//! [`crate::repair`] first. Individual features that fail to deserialize
//! are logged and skipped so one bad polygon never hides a whole region.

use std::path::Path;

use geojson::{Feature, FeatureCollection};

use crate::GeoError;

/// Parses a `FeatureCollection` document.
///
/// `label` identifies the source in log messages.
///
/// # Errors
///
/// Returns [`GeoError::Json`] if the text is not JSON, or
/// [`GeoError::InvalidCollection`] if it is not a `FeatureCollection`
/// with a `features` array.
pub fn parse_feature_collection(json: &str, label: &str) -> Result<FeatureCollection, GeoError> {
    let document: serde_json::Value = serde_json::from_str(json)?;

    let serde_json::Value::Object(mut object) = document else {
        return Err(GeoError::InvalidCollection {
            message: format!("{label}: top-level value is not an object"),
        });
    };

    match object.get("type").and_then(serde_json::Value::as_str) {
        Some("FeatureCollection") => {}
        other => {
            return Err(GeoError::InvalidCollection {
                message: format!("{label}: expected type FeatureCollection, found {other:?}"),
            });
        }
    }

    let Some(serde_json::Value::Array(raw_features)) = object.remove("features") else {
        return Err(GeoError::InvalidCollection {
            message: format!("{label}: missing features array"),
        });
    };

    let total = raw_features.len();
    let features: Vec<Feature> = raw_features
        .into_iter()
        .enumerate()
        .filter_map(|(i, raw)| match serde_json::from_value::<Feature>(raw) {
            Ok(feature) => Some(feature),
            Err(e) => {
                log::warn!("{label}: skipping malformed feature #{i}: {e}");
                None
            }
        })
        .collect();

    log::debug!("{label}: parsed {} of {total} features", features.len());

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

/// Reads and parses a `FeatureCollection` file.
///
/// # Errors
///
/// Returns [`GeoError::Io`] if the file cannot be read, or any error from
/// [`parse_feature_collection`].
pub fn read_feature_collection(path: &Path) -> Result<FeatureCollection, GeoError> {
    let content = std::fs::read_to_string(path)?;
    parse_feature_collection(&content, &path.display().to_string())
}

/// Reads a `FeatureCollection` file, logging and returning an empty
/// collection on any failure.
#[must_use]
pub fn read_or_empty(path: &Path) -> FeatureCollection {
    match read_feature_collection(path) {
        Ok(collection) => collection,
        Err(e) => {
            log::warn!("Boundary source {} unavailable: {e}", path.display());
            crate::index::empty_collection()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_collection() {
        let json = serde_json::json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "name": "Chilonzor" },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[69.18, 41.28], [69.24, 41.28], [69.24, 41.25], [69.18, 41.28]]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": { "name": "Nowhere" },
                    "geometry": null
                }
            ]
        })
        .to_string();

        let collection = parse_feature_collection(&json, "test").unwrap();
        assert_eq!(collection.features.len(), 2);
        assert!(collection.features[1].geometry.is_none());
    }

    #[test]
    fn malformed_feature_is_skipped() {
        let json = serde_json::json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": {}, "geometry": { "type": "Polygon", "coordinates": "oops" } },
                { "type": "Feature", "properties": { "name": "ok" }, "geometry": { "type": "Point", "coordinates": [1.0, 2.0] } }
            ]
        })
        .to_string();

        let collection = parse_feature_collection(&json, "test").unwrap();
        assert_eq!(collection.features.len(), 1);
    }

    #[test]
    fn rejects_non_collections() {
        assert!(matches!(
            parse_feature_collection(r#"{"type": "Feature"}"#, "test"),
            Err(GeoError::InvalidCollection { .. })
        ));
        assert!(matches!(
            parse_feature_collection(r#"{"type": "FeatureCollection"}"#, "test"),
            Err(GeoError::InvalidCollection { .. })
        ));
        assert!(matches!(
            parse_feature_collection("[1, 2]", "test"),
            Err(GeoError::InvalidCollection { .. })
        ));
    }

    #[test]
    fn rejects_javascript_wrappers() {
        let js = r#"const regions = { type: "FeatureCollection", features: [] };"#;
        assert!(matches!(
            parse_feature_collection(js, "test"),
            Err(GeoError::Json(_))
        ));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let collection = read_or_empty(Path::new("/nonexistent/uzcrime/regions.json"));
        assert!(collection.features.is_empty());
    }
}

//! Human-readable labels for boundary features.

use geojson::JsonObject;
use uzcrime_geography_models::{LABEL_PROPERTY_KEYS, UNKNOWN_LABEL};

/// Returns the display label for a feature's properties.
///
/// Checks [`LABEL_PROPERTY_KEYS`] in order and returns the first non-empty
/// string value, falling back to [`UNKNOWN_LABEL`]. Non-string values are
/// skipped, so a numeric `name` such as `42` never becomes a label and the
/// next key is tried instead.
#[must_use]
pub fn feature_label(properties: Option<&JsonObject>) -> &str {
    properties
        .and_then(|props| {
            LABEL_PROPERTY_KEYS
                .iter()
                .filter_map(|key| props.get(*key).and_then(serde_json::Value::as_str))
                .find(|value| !value.is_empty())
        })
        .unwrap_or(UNKNOWN_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(value: serde_json::Value) -> JsonObject {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn prefers_generic_name() {
        let p = props(serde_json::json!({
            "name": "Andijon viloyati",
            "ADM1_EN": "Andijan Region",
        }));
        assert_eq!(feature_label(Some(&p)), "Andijon viloyati");
    }

    #[test]
    fn falls_back_through_admin_names_in_order() {
        let p = props(serde_json::json!({
            "ADM1_RU": "Андижанская область",
            "ADM1_EN": "Andijan Region",
        }));
        assert_eq!(feature_label(Some(&p)), "Andijan Region");

        let p = props(serde_json::json!({ "name": "", "ADM1_UZ": "Andijon" }));
        assert_eq!(feature_label(Some(&p)), "Andijon");
    }

    #[test]
    fn unknown_when_nothing_usable() {
        assert_eq!(feature_label(None), UNKNOWN_LABEL);

        let p = props(serde_json::json!({ "name": 42, "code": "UZ-AN" }));
        assert_eq!(feature_label(Some(&p)), UNKNOWN_LABEL);
    }

    #[test]
    fn numeric_name_falls_through_to_next_key() {
        let p = props(serde_json::json!({ "name": 42, "ADM1_EN": "Andijan Region" }));
        assert_eq!(feature_label(Some(&p)), "Andijan Region");
    }
}

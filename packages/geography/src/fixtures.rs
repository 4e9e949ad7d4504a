//! Boundary collections compiled into the binary.
//!
//! These cover the parts of the drill-down that have no upstream boundary
//! file: the simplified country outline, the districts of Tashkent City,
//! and a generated mahalla grid for Chilonzor.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use uzcrime_geography_models::BuiltinCollection;

const MAHALLA_ORIGIN_LAT: f64 = 41.25;
const MAHALLA_ORIGIN_LNG: f64 = 69.18;
const MAHALLA_LAT_STEP: f64 = 0.01;
const MAHALLA_LNG_STEP: f64 = 0.02;
const MAHALLA_ROWS: u32 = 3;
const MAHALLA_COLS: u32 = 3;

/// District that the generated mahalla grid belongs to.
pub const MAHALLA_DISTRICT: &str = "Chilonzor";

/// Returns the built-in collection for `collection`.
#[must_use]
pub fn builtin(collection: BuiltinCollection) -> FeatureCollection {
    match collection {
        BuiltinCollection::TashkentCity => tashkent_city_districts(),
    }
}

/// Simplified outline of Uzbekistan, including two exclave polygons.
#[must_use]
pub fn uzbekistan_border() -> FeatureCollection {
    let main_body = vec![vec![
        vec![56.0, 45.0],
        vec![73.0, 45.0],
        vec![73.0, 37.0],
        vec![56.0, 37.0],
        vec![56.0, 45.0],
    ]];
    let sokh = vec![vec![
        vec![71.800_885, 40.003_191],
        vec![71.780_75, 40.020_75],
        vec![71.777_815, 40.021_125],
        vec![71.776_313, 40.019_487],
        vec![71.810_816, 40.003_772],
        vec![71.800_885, 40.003_191],
    ]];
    let shohimardan = vec![vec![
        vec![71.007_037, 40.182_499],
        vec![70.999_62, 40.184_521],
        vec![71.041_789, 40.181_824],
        vec![71.020_95, 40.178_147],
        vec![71.007_037, 40.182_499],
    ]];

    collection(vec![feature(
        "Uzbekistan",
        Value::MultiPolygon(vec![main_body, sokh, shohimardan]),
    )])
}

/// Districts of Tashkent City.
#[must_use]
pub fn tashkent_city_districts() -> FeatureCollection {
    collection(vec![
        rectangle("Chilonzor", 69.18, 41.25, 69.24, 41.28),
        rectangle("Yunusobod", 69.25, 41.30, 69.30, 41.35),
        rectangle("Mirzo Ulugbek", 69.30, 41.29, 69.35, 41.34),
        rectangle("Yashnobod", 69.28, 41.25, 69.34, 41.29),
        rectangle("Sergeli", 69.18, 41.20, 69.25, 41.24),
    ])
}

/// A 3×3 grid of simulated mahallas covering the south-west of Chilonzor.
/// Cells are named `Mahalla-{row}-{col}`.
#[must_use]
pub fn chilonzor_mahallas() -> FeatureCollection {
    let mut features = Vec::new();

    for row in 0..MAHALLA_ROWS {
        for col in 0..MAHALLA_COLS {
            let south = f64::from(row).mul_add(MAHALLA_LAT_STEP, MAHALLA_ORIGIN_LAT);
            let west = f64::from(col).mul_add(MAHALLA_LNG_STEP, MAHALLA_ORIGIN_LNG);
            features.push(rectangle(
                &format!("Mahalla-{row}-{col}"),
                west,
                south,
                west + MAHALLA_LNG_STEP,
                south + MAHALLA_LAT_STEP,
            ));
        }
    }

    collection(features)
}

/// Axis-aligned rectangle traced north-west → north-east → south-east →
/// south-west → north-west.
fn rectangle(name: &str, west: f64, south: f64, east: f64, north: f64) -> Feature {
    feature(
        name,
        Value::Polygon(vec![vec![
            vec![west, north],
            vec![east, north],
            vec![east, south],
            vec![west, south],
            vec![west, north],
        ]]),
    )
}

fn feature(name: &str, value: Value) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("name".to_string(), serde_json::Value::from(name));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

const fn collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use crate::label::feature_label;

    use super::*;

    fn labels(collection: &FeatureCollection) -> Vec<&str> {
        collection
            .features
            .iter()
            .map(|f| feature_label(f.properties.as_ref()))
            .collect()
    }

    #[test]
    fn tashkent_city_has_five_districts() {
        assert_eq!(
            labels(&tashkent_city_districts()),
            ["Chilonzor", "Yunusobod", "Mirzo Ulugbek", "Yashnobod", "Sergeli"]
        );
    }

    #[test]
    fn mahalla_grid_is_row_major() {
        let grid = chilonzor_mahallas();
        assert_eq!(grid.features.len(), 9);
        assert_eq!(labels(&grid)[0], "Mahalla-0-0");
        assert_eq!(labels(&grid)[5], "Mahalla-1-2");
    }

    #[test]
    fn mahalla_cells_are_closed_rings_of_expected_size() {
        for feature in chilonzor_mahallas().features {
            let Some(Value::Polygon(rings)) = feature.geometry.map(|g| g.value) else {
                panic!("mahalla is not a polygon");
            };
            let ring = &rings[0];
            assert_eq!(ring.len(), 5);
            assert_eq!(ring.first(), ring.last());
            assert!((ring[1][0] - ring[0][0] - MAHALLA_LNG_STEP).abs() < 1e-9);
            assert!((ring[0][1] - ring[2][1] - MAHALLA_LAT_STEP).abs() < 1e-9);
        }
    }

    #[test]
    fn border_is_one_multipolygon_with_exclaves() {
        let border = uzbekistan_border();
        assert_eq!(border.features.len(), 1);
        assert!(matches!(
            border.features[0].geometry.as_ref().map(|g| &g.value),
            Some(Value::MultiPolygon(parts)) if parts.len() == 3
        ));
    }
}

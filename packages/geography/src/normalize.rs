//! Geometry normalization.
//!
//! Boundary sources occasionally wrap a region's polygons in a
//! `GeometryCollection`, which map renderers handle poorly. Normalization
//! collapses such collections into a single `Polygon` or `MultiPolygon`
//! so every feature that survives has a renderable geometry.

use geojson::{Feature, FeatureCollection, Geometry, Value};

/// Normalizes a single geometry.
///
/// * `None` stays `None`.
/// * A `GeometryCollection` keeps only its polygonal members: none yields
///   `None`, one is returned as-is, several are merged into one
///   `MultiPolygon` whose polygons are the members' ring-sets in order.
/// * Any other geometry is returned unchanged.
#[must_use]
pub fn normalize_geometry(geometry: Option<Geometry>) -> Option<Geometry> {
    let geometry = geometry?;

    match geometry.value {
        Value::GeometryCollection(members) => collapse_collection(members),
        value => Some(Geometry { value, ..geometry }),
    }
}

/// Normalizes every feature's geometry and drops features left without one.
#[must_use]
pub fn normalize_collection(collection: FeatureCollection) -> FeatureCollection {
    let before = collection.features.len();

    let features: Vec<Feature> = collection
        .features
        .into_iter()
        .filter_map(|mut feature| {
            feature.geometry = Some(normalize_geometry(feature.geometry.take())?);
            Some(feature)
        })
        .collect();

    let dropped = before - features.len();
    if dropped > 0 {
        log::debug!("Dropped {dropped} of {before} features without polygonal geometry");
    }

    FeatureCollection {
        features,
        ..collection
    }
}

const fn is_polygonal(value: &Value) -> bool {
    matches!(value, Value::Polygon(_) | Value::MultiPolygon(_))
}

fn collapse_collection(members: Vec<Geometry>) -> Option<Geometry> {
    let mut polygons: Vec<Geometry> = members
        .into_iter()
        .filter(|member| is_polygonal(&member.value))
        .collect();

    if polygons.len() <= 1 {
        return polygons.pop();
    }

    let coordinates = polygons
        .into_iter()
        .flat_map(|member| match member.value {
            Value::Polygon(rings) => vec![rings],
            Value::MultiPolygon(ring_sets) => ring_sets,
            _ => Vec::new(),
        })
        .collect();

    Some(Geometry::new(Value::MultiPolygon(coordinates)))
}

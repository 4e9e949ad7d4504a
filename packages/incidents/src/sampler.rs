//! Disk-uniform coordinate sampling.

use std::f64::consts::PI;

use rand::Rng;
use uzcrime_geography_models::Coordinates;

/// Approximate kilometres per degree of latitude.
pub const KM_PER_DEGREE: f64 = 111.32;

/// Samples a point uniformly inside a disk of `radius_km` around `center`.
#[must_use]
pub fn sample_point<R: Rng + ?Sized>(center: Coordinates, radius_km: f64, rng: &mut R) -> Coordinates {
    let u: f64 = rng.random();
    let v: f64 = rng.random();
    offset_point(center, radius_km / KM_PER_DEGREE, u, v)
}

/// Maps unit samples `u`, `v` in `[0, 1)` to a point within `radius_deg`
/// of `center`.
///
/// The longitude offset is divided by `cos(center.lat)` with the latitude
/// passed through in degrees, not radians. Existing marker layouts are
/// built on this, so it must not be corrected.
#[must_use]
pub fn offset_point(center: Coordinates, radius_deg: f64, u: f64, v: f64) -> Coordinates {
    let w = radius_deg * u.sqrt();
    let t = 2.0 * PI * v;

    Coordinates::new(
        w.mul_add(t.cos(), center.lat),
        w * t.sin() / center.lat.cos() + center.lng,
    )
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;

    use super::*;

    /// Squared distance from `center`, undoing the longitude stretch.
    fn disk_distance_sq(center: Coordinates, point: Coordinates) -> f64 {
        let dlat = point.lat - center.lat;
        let dlng = (point.lng - center.lng) * center.lat.cos();
        dlat.mul_add(dlat, dlng * dlng)
    }

    #[test]
    fn zero_u_is_the_center() {
        let center = Coordinates::new(41.3111, 69.2797);
        assert_eq!(offset_point(center, 0.5, 0.0, 0.3), center);
    }

    #[test]
    fn longitude_stretch_uses_raw_degrees() {
        let center = Coordinates::new(40.0, 65.0);
        // v = 0.25 puts the whole offset on the longitude axis.
        let point = offset_point(center, 1.0, 1.0, 0.25);
        assert!((point.lat - 40.0).abs() < 1e-9);
        assert!((point.lng - (65.0 + 1.0 / 40.0_f64.cos())).abs() < 1e-9);
    }

    #[test]
    fn samples_stay_inside_the_disk() {
        let mut rng = StdRng::seed_from_u64(7);
        let radius = 18.0;
        let r = radius / KM_PER_DEGREE;

        for center in [
            Coordinates::new(41.3111, 69.2797),
            Coordinates::new(43.7683, 59.0214),
            Coordinates::new(37.9409, 67.5709),
        ] {
            for _ in 0..500 {
                let point = sample_point(center, radius, &mut rng);
                assert!(disk_distance_sq(center, point) <= r.mul_add(r, 1e-12));
            }
        }
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let center = Coordinates::new(39.6542, 66.9597);
        let a = sample_point(center, 18.0, &mut StdRng::seed_from_u64(42));
        let b = sample_point(center, 18.0, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}

use serde::{Deserialize, Serialize};

use crate::allometry;
use crate::species::SpeciesCoefficients;

/// Round to one decimal place, half away from zero (`f64::round` semantics).
///
/// This is the single rounding convention used for every reported value;
/// raw intermediate values are never exposed.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One set of estimated tree measurements, rounded to one decimal place.
///
/// Serialized field names match the caller-facing contract: `dbh` and
/// `girth` in centimeters, `height` and `canopy` in meters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrunkMeasurement {
    /// Diameter at breast height, cm.
    #[serde(rename = "dbh")]
    pub dbh_cm: f64,
    /// Trunk circumference, cm.
    #[serde(rename = "girth")]
    pub girth_cm: f64,
    /// Estimated tree height, m.
    #[serde(rename = "height")]
    pub height_m: f64,
    /// Estimated canopy spread, m.
    #[serde(rename = "canopy")]
    pub canopy_m: f64,
}

impl TrunkMeasurement {
    /// Project girth, height, and canopy from an unrounded diameter using
    /// the given species coefficients, then round every field.
    pub fn from_dbh(dbh_cm: f64, coeffs: &SpeciesCoefficients) -> Self {
        Self {
            dbh_cm: round_to_tenth(dbh_cm),
            girth_cm: round_to_tenth(allometry::girth_cm(dbh_cm)),
            height_m: round_to_tenth(allometry::height_m(coeffs, dbh_cm)),
            canopy_m: round_to_tenth(allometry::canopy_m(coeffs, dbh_cm)),
        }
    }
}

/// Trivial readiness report for the estimator subsystem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

impl HealthStatus {
    pub fn healthy(service: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::SpeciesTable;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to_tenth(1.25), 1.3);
        assert_eq!(round_to_tenth(1.35), 1.4);
        assert_eq!(round_to_tenth(-1.25), -1.3);
        assert_eq!(round_to_tenth(2.04), 2.0);
        assert_eq!(round_to_tenth(0.0), 0.0);
    }

    #[test]
    fn from_dbh_rounds_every_field_to_one_decimal() {
        let c = SpeciesTable::builtin().resolve("Ginkgo");
        let m = TrunkMeasurement::from_dbh(23.456, &c);
        for v in [m.dbh_cm, m.girth_cm, m.height_m, m.canopy_m] {
            assert!(v >= 0.0);
            let scaled = v * 10.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "{v} has more than one decimal digit"
            );
        }
        assert_eq!(m.dbh_cm, 23.5);
    }

    #[test]
    fn girth_tracks_rounded_pi_times_dbh() {
        let c = SpeciesTable::builtin().resolve("Default");
        let m = TrunkMeasurement::from_dbh(20.0, &c);
        assert_eq!(m.girth_cm, round_to_tenth(std::f64::consts::PI * 20.0));
    }

    #[test]
    fn serializes_with_contract_field_names() {
        let c = SpeciesTable::builtin().resolve("Default");
        let m = TrunkMeasurement::from_dbh(10.0, &c);
        let json = serde_json::to_value(m).unwrap();
        for key in ["dbh", "girth", "height", "canopy"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }
}

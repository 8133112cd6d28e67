use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Species name used when the requested species is not in the table.
pub const DEFAULT_SPECIES: &str = "Default";

/// Allometric power-law coefficients for one species.
///
/// Height and canopy spread are projected from trunk diameter as
/// `height_m = height_a * dbh_cm ^ height_b` and
/// `canopy_m = canopy_a * dbh_cm ^ canopy_b`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeciesCoefficients {
    pub height_a: f64,
    pub height_b: f64,
    pub canopy_a: f64,
    pub canopy_b: f64,
}

impl SpeciesCoefficients {
    pub const fn new(height_a: f64, height_b: f64, canopy_a: f64, canopy_b: f64) -> Self {
        Self {
            height_a,
            height_b,
            canopy_a,
            canopy_b,
        }
    }
}

/// Immutable species-to-coefficients table.
///
/// Built once at startup and passed by reference into the estimator; it is
/// never mutated afterwards, so a shared `&SpeciesTable` is safe across
/// concurrently running estimations. The table always contains a
/// [`DEFAULT_SPECIES`] entry used as the fallback for unknown names.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpeciesTable {
    entries: BTreeMap<String, SpeciesCoefficients>,
}

impl SpeciesTable {
    /// Build the built-in table.
    ///
    /// Coefficients are urban street-tree allometry fits; they are quality
    /// control placeholders, not survey-grade values.
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            "Silver maple".to_string(),
            SpeciesCoefficients::new(1.50, 1.778, 0.82, 1.995),
        );
        entries.insert(
            "Ginkgo".to_string(),
            SpeciesCoefficients::new(1.71, 1.465, 0.63, 1.989),
        );
        entries.insert(
            "Oak".to_string(),
            SpeciesCoefficients::new(1.30, 1.50, 0.70, 1.20),
        );
        entries.insert(
            "Maple".to_string(),
            SpeciesCoefficients::new(1.50, 1.70, 0.80, 2.00),
        );
        entries.insert(
            "Pine".to_string(),
            SpeciesCoefficients::new(0.80, 1.25, 0.50, 1.40),
        );
        entries.insert(
            DEFAULT_SPECIES.to_string(),
            SpeciesCoefficients::new(1.00, 1.200, 0.50, 1.500),
        );
        Self { entries }
    }

    /// Build a table from explicit entries. A [`DEFAULT_SPECIES`] entry is
    /// inserted with the built-in fallback coefficients if missing.
    pub fn from_entries(entries: BTreeMap<String, SpeciesCoefficients>) -> Self {
        let mut entries = entries;
        entries
            .entry(DEFAULT_SPECIES.to_string())
            .or_insert(SpeciesCoefficients::new(1.00, 1.200, 0.50, 1.500));
        Self { entries }
    }

    /// Look up a species by exact, case-sensitive name.
    pub fn get(&self, species: &str) -> Option<SpeciesCoefficients> {
        self.entries.get(species).copied()
    }

    /// Look up a species, falling back to [`DEFAULT_SPECIES`] for unknown
    /// names. No fuzzy matching.
    pub fn resolve(&self, species: &str) -> SpeciesCoefficients {
        self.get(species).unwrap_or_else(|| {
            log::debug!("unknown species {species:?}, using {DEFAULT_SPECIES:?}");
            self.entries[DEFAULT_SPECIES]
        })
    }

    /// Whether the table is usable: non-empty and carrying the fallback entry.
    pub fn is_ready(&self) -> bool {
        self.entries.contains_key(DEFAULT_SPECIES)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Read-only export of the table for caller introspection (e.g. filling
    /// a species picker).
    pub fn export(&self) -> SpeciesTableExport {
        SpeciesTableExport {
            species: self.entries.keys().cloned().collect(),
            coefficients: self
                .entries
                .iter()
                .map(|(name, c)| {
                    (
                        name.clone(),
                        CoefficientExport {
                            height: [c.height_a, c.height_b],
                            canopy: [c.canopy_a, c.canopy_b],
                        },
                    )
                })
                .collect(),
        }
    }
}

impl Default for SpeciesTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// `[a, b]` coefficient pairs for one species, as exported to callers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoefficientExport {
    pub height: [f64; 2],
    pub canopy: [f64; 2],
}

/// Wire shape of the species table: names plus per-species coefficient pairs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpeciesTableExport {
    pub species: Vec<String>,
    pub coefficients: BTreeMap<String, CoefficientExport>,
}

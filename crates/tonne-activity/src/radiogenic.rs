// ─────────────────────────────────────────────────────────────────────
// NEXT-Tonne Backgrounds — Radiogenic Assay Activities
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Assay-based radiogenic activities of the tracked detector materials.
//!
//! Copper and PTFE are measured values (PNNL assays); dice boards are
//! limits for the current Kapton boards scaled from activity per unit to
//! activity per m^2. Stainless steel is out of scope in this generation,
//! so no cathode contribution is derivable from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tonne_types::error::{TonneError, TonneResult};
use tonne_types::units::{KG, M2, MILLIBECQUEREL};

use crate::IsotopeActivity;

/// Background scenario vocabulary of the assay table. Distinct from the
/// screening-limit vocabulary; the two sets must not be mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiogenicLevel {
    /// Current activity limits and measurements.
    Reference,
    /// Expected by Next-Tonne construction time (dice boards / 10).
    Probable,
    /// Best plausible scenario (electroformed copper, dice boards / 20).
    Optimistic,
}

impl RadiogenicLevel {
    pub const ALL: [RadiogenicLevel; 3] = [
        RadiogenicLevel::Reference,
        RadiogenicLevel::Probable,
        RadiogenicLevel::Optimistic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RadiogenicLevel::Reference => "reference",
            RadiogenicLevel::Probable => "probable",
            RadiogenicLevel::Optimistic => "optimistic",
        }
    }
}

impl FromStr for RadiogenicLevel {
    type Err = TonneError;

    fn from_str(s: &str) -> TonneResult<Self> {
        match s {
            "reference" => Ok(RadiogenicLevel::Reference),
            "probable" => Ok(RadiogenicLevel::Probable),
            "optimistic" => Ok(RadiogenicLevel::Optimistic),
            other => Err(TonneError::unknown_key("radiogenic level", other)),
        }
    }
}

impl fmt::Display for RadiogenicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activities of the assay-table materials for one scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiogenicActivities {
    /// Bulk copper [per mass].
    pub copper: IsotopeActivity,
    /// Readout dice boards [per area].
    pub dice_board: IsotopeActivity,
    /// Field-cage PTFE [per mass].
    pub teflon: IsotopeActivity,
}

/// Assay activities for the requested scenario.
pub fn radiogenic_activities(level: RadiogenicLevel) -> RadiogenicActivities {
    match level {
        RadiogenicLevel::Reference => RadiogenicActivities {
            // PNNL copper measurement.
            copper: IsotopeActivity {
                tl208: 4.35e-4 * MILLIBECQUEREL / KG,
                bi214: 1.26e-3 * MILLIBECQUEREL / KG,
            },
            // Kapton board limits, 11x11 cm2 units scaled to act/m^2.
            dice_board: IsotopeActivity {
                tl208: 8.595e-1 * MILLIBECQUEREL / M2,
                bi214: 5.785 * MILLIBECQUEREL / M2,
            },
            // PNNL PTFE measurement.
            teflon: IsotopeActivity {
                tl208: 8.23e-3 * MILLIBECQUEREL / KG,
                bi214: 2.27e-2 * MILLIBECQUEREL / KG,
            },
        },
        RadiogenicLevel::Probable => RadiogenicActivities {
            copper: IsotopeActivity {
                tl208: 4.35e-4 * MILLIBECQUEREL / KG,
                bi214: 1.26e-3 * MILLIBECQUEREL / KG,
            },
            // Current board limits / 10.
            dice_board: IsotopeActivity {
                tl208: 8.595e-2 * MILLIBECQUEREL / M2,
                bi214: 5.785e-1 * MILLIBECQUEREL / M2,
            },
            teflon: IsotopeActivity {
                tl208: 8.23e-3 * MILLIBECQUEREL / KG,
                bi214: 2.27e-2 * MILLIBECQUEREL / KG,
            },
        },
        RadiogenicLevel::Optimistic => RadiogenicActivities {
            // Electroformed copper limits from Majorana (radiopurity.org).
            copper: IsotopeActivity {
                tl208: 4.27e-5 * MILLIBECQUEREL / KG,
                bi214: 9.92e-5 * MILLIBECQUEREL / KG,
            },
            // Current board limits / 20.
            dice_board: IsotopeActivity {
                tl208: 4.298e-2 * MILLIBECQUEREL / M2,
                bi214: 2.893e-1 * MILLIBECQUEREL / M2,
            },
            teflon: IsotopeActivity {
                tl208: 8.23e-3 * MILLIBECQUEREL / KG,
                bi214: 2.27e-2 * MILLIBECQUEREL / KG,
            },
        },
    }
}

impl fmt::Display for RadiogenicActivities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let per_kg = MILLIBECQUEREL / KG;
        let per_m2 = MILLIBECQUEREL / M2;
        writeln!(f, "* Copper:")?;
        writeln!(f, "    Tl208: {:8.3e} mBq/kg", self.copper.tl208 / per_kg)?;
        writeln!(f, "    Bi214: {:8.3e} mBq/kg", self.copper.bi214 / per_kg)?;
        writeln!(f, "* DiceBoard:")?;
        writeln!(f, "    Tl208: {:8.3e} mBq/m^2", self.dice_board.tl208 / per_m2)?;
        writeln!(f, "    Bi214: {:8.3e} mBq/m^2", self.dice_board.bi214 / per_m2)?;
        writeln!(f, "* Teflon:")?;
        writeln!(f, "    Tl208: {:8.3e} mBq/kg", self.teflon.tl208 / per_kg)?;
        write!(f, "    Bi214: {:8.3e} mBq/kg", self.teflon.bi214 / per_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing() {
        assert_eq!(
            "reference".parse::<RadiogenicLevel>().unwrap(),
            RadiogenicLevel::Reference
        );
        assert!(matches!(
            "pessimistic".parse::<RadiogenicLevel>(),
            Err(TonneError::UnknownKey { .. })
        ));
    }

    #[test]
    fn test_reference_copper_values() {
        let act = radiogenic_activities(RadiogenicLevel::Reference);
        assert!((act.copper.bi214 / (MILLIBECQUEREL / KG) - 1.26e-3).abs() < 1e-12);
        assert!((act.copper.tl208 / (MILLIBECQUEREL / KG) - 4.35e-4).abs() < 1e-12);
    }

    #[test]
    fn test_dice_board_scaling_between_levels() {
        let reference = radiogenic_activities(RadiogenicLevel::Reference);
        let probable = radiogenic_activities(RadiogenicLevel::Probable);
        let optimistic = radiogenic_activities(RadiogenicLevel::Optimistic);

        // Probable boards are the current ones improved tenfold.
        assert!(
            (reference.dice_board.bi214 / probable.dice_board.bi214 - 10.0).abs() < 1e-9,
            "probable boards should be reference / 10"
        );
        // Optimistic boards improve on the current ones twentyfold.
        assert!(
            (reference.dice_board.bi214 / optimistic.dice_board.bi214 - 20.0).abs() < 0.01,
            "optimistic boards should be reference / 20"
        );
    }

    #[test]
    fn test_optimistic_copper_is_electroformed() {
        let reference = radiogenic_activities(RadiogenicLevel::Reference);
        let optimistic = radiogenic_activities(RadiogenicLevel::Optimistic);
        assert!(optimistic.copper.bi214 < reference.copper.bi214 / 10.0);
        assert!(optimistic.copper.tl208 < reference.copper.tl208 / 10.0);
    }

    #[test]
    fn test_teflon_common_to_all_levels() {
        let teflon: Vec<_> = RadiogenicLevel::ALL
            .iter()
            .map(|&level| radiogenic_activities(level).teflon)
            .collect();
        assert_eq!(teflon[0], teflon[1]);
        assert_eq!(teflon[1], teflon[2]);
    }

    #[test]
    fn test_all_activities_positive() {
        for level in RadiogenicLevel::ALL {
            let act = radiogenic_activities(level);
            for entry in [act.copper, act.dice_board, act.teflon] {
                assert!(entry.tl208 > 0.0);
                assert!(entry.bi214 > 0.0);
            }
        }
    }
}

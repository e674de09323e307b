// ─────────────────────────────────────────────────────────────────────
// NEXT-Tonne Backgrounds — Radon Activities
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Radon contamination scenarios (arXiv:1804.00471).
//!
//! The two scenarios carry different unit conventions: gas-system radon
//! is quoted as an absolute activity for the whole detector, degassing
//! radon as an activity per unit of surface facing the active volume.
//! The tagged result type keeps the two from being confused downstream.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tonne_types::error::{TonneError, TonneResult};
use tonne_types::units::{M2, MILLIBECQUEREL};

/// Radon scenario vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadonLevel {
    /// Radon from the gas system only.
    Optimistic,
    /// Radon from materials facing the active volume degassing.
    Pessimistic,
}

impl RadonLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RadonLevel::Optimistic => "optimistic",
            RadonLevel::Pessimistic => "pessimistic",
        }
    }
}

impl FromStr for RadonLevel {
    type Err = TonneError;

    fn from_str(s: &str) -> TonneResult<Self> {
        match s {
            "optimistic" => Ok(RadonLevel::Optimistic),
            "pessimistic" => Ok(RadonLevel::Pessimistic),
            other => Err(TonneError::unknown_key("radon level", other)),
        }
    }
}

impl fmt::Display for RadonLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Radon activity tagged by its unit convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RadonActivity {
    /// Whole-detector activity, already a background level.
    Absolute(f64),
    /// Activity per unit of inner detector surface.
    PerSurface(f64),
}

/// Radon activity for the requested scenario.
pub fn radon_activity(level: RadonLevel) -> RadonActivity {
    match level {
        RadonLevel::Optimistic => RadonActivity::Absolute(3.11 * MILLIBECQUEREL),
        RadonLevel::Pessimistic => RadonActivity::PerSurface(2.91 * MILLIBECQUEREL / M2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimistic_is_absolute() {
        match radon_activity(RadonLevel::Optimistic) {
            RadonActivity::Absolute(act) => {
                assert!((act / MILLIBECQUEREL - 3.11).abs() < 1e-12)
            }
            RadonActivity::PerSurface(_) => panic!("gas-system radon must be absolute"),
        }
    }

    #[test]
    fn test_pessimistic_is_per_surface() {
        match radon_activity(RadonLevel::Pessimistic) {
            RadonActivity::PerSurface(act) => {
                assert!((act / (MILLIBECQUEREL / M2) - 2.91).abs() < 1e-12)
            }
            RadonActivity::Absolute(_) => panic!("degassing radon must be per surface"),
        }
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!(
            "optimistic".parse::<RadonLevel>().unwrap(),
            RadonLevel::Optimistic
        );
        assert!(matches!(
            "probable".parse::<RadonLevel>(),
            Err(TonneError::UnknownKey { .. })
        ));
    }
}

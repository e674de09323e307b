// ─────────────────────────────────────────────────────────────────────
// NEXT-Tonne Backgrounds — Screening-Limit Activities
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Earlier-generation material activities built from screening upper
//! limits (Activity Assumptions v8, NEXT-100 sensitivity paper for the
//! boards). The field cage is HDPE here and the cathode steel is in
//! scope. All three scenarios currently share the same limit values;
//! the vocabulary still differs from the assay table on purpose.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tonne_types::error::{TonneError, TonneResult};
use tonne_types::units::{KG, M2, MILLIBECQUEREL};

use crate::IsotopeActivity;

/// Background scenario vocabulary of the screening table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreeningLevel {
    Pessimistic,
    Probable,
    Optimistic,
}

impl ScreeningLevel {
    pub const ALL: [ScreeningLevel; 3] = [
        ScreeningLevel::Pessimistic,
        ScreeningLevel::Probable,
        ScreeningLevel::Optimistic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScreeningLevel::Pessimistic => "pessimistic",
            ScreeningLevel::Probable => "probable",
            ScreeningLevel::Optimistic => "optimistic",
        }
    }
}

impl FromStr for ScreeningLevel {
    type Err = TonneError;

    fn from_str(s: &str) -> TonneResult<Self> {
        match s {
            "pessimistic" => Ok(ScreeningLevel::Pessimistic),
            "probable" => Ok(ScreeningLevel::Probable),
            "optimistic" => Ok(ScreeningLevel::Optimistic),
            other => Err(TonneError::unknown_key("screening level", other)),
        }
    }
}

impl fmt::Display for ScreeningLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activities of the screening-table materials for one scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreeningActivities {
    /// Bulk copper, Lugand Aciers provider [per mass].
    pub copper: IsotopeActivity,
    /// Readout dice boards, 10x10 cm2 Kapton units [per area].
    pub dice_board: IsotopeActivity,
    /// Field-cage HDPE [per mass].
    pub hdpe: IsotopeActivity,
    /// 316Ti steel, Nironit provider [per mass].
    pub ssteel316ti: IsotopeActivity,
}

/// Screening-limit activities for the requested scenario.
pub fn screening_activities(level: ScreeningLevel) -> ScreeningActivities {
    // Upper limits; no improved projections have been adopted yet, so the
    // three scenarios coincide.
    let _ = level;
    ScreeningActivities {
        copper: IsotopeActivity {
            tl208: 1.47e-3 * MILLIBECQUEREL / KG,
            bi214: 12.00e-3 * MILLIBECQUEREL / KG,
        },
        dice_board: IsotopeActivity {
            tl208: 1.04 * MILLIBECQUEREL / M2,
            bi214: 7.00 * MILLIBECQUEREL / M2,
        },
        hdpe: IsotopeActivity {
            tl208: 7.55e-3 * MILLIBECQUEREL / KG,
            bi214: 6.20e-2 * MILLIBECQUEREL / KG,
        },
        ssteel316ti: IsotopeActivity {
            tl208: 4.31e-2 * MILLIBECQUEREL / KG,
            bi214: 4.60e-1 * MILLIBECQUEREL / KG,
        },
    }
}

impl fmt::Display for ScreeningActivities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let per_kg = MILLIBECQUEREL / KG;
        let per_m2 = MILLIBECQUEREL / M2;
        writeln!(f, "* Copper:")?;
        writeln!(f, "    Tl208: {:.4e} mBq/kg", self.copper.tl208 / per_kg)?;
        writeln!(f, "    Bi214: {:.4e} mBq/kg", self.copper.bi214 / per_kg)?;
        writeln!(f, "* DiceBoard:")?;
        writeln!(f, "    Tl208: {:.4e} mBq/m^2", self.dice_board.tl208 / per_m2)?;
        writeln!(f, "    Bi214: {:.4e} mBq/m^2", self.dice_board.bi214 / per_m2)?;
        writeln!(f, "* HDPE:")?;
        writeln!(f, "    Tl208: {:.4e} mBq/kg", self.hdpe.tl208 / per_kg)?;
        writeln!(f, "    Bi214: {:.4e} mBq/kg", self.hdpe.bi214 / per_kg)?;
        writeln!(f, "* SSteel316Ti:")?;
        writeln!(f, "    Tl208: {:.4e} mBq/kg", self.ssteel316ti.tl208 / per_kg)?;
        write!(f, "    Bi214: {:.4e} mBq/kg", self.ssteel316ti.bi214 / per_kg)
    }
}

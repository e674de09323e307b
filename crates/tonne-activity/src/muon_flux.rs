// ─────────────────────────────────────────────────────────────────────
// NEXT-Tonne Backgrounds — Hosting-Lab Muon Fluxes
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Measured residual muon fluxes at the candidate hosting laboratories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tonne_types::error::{TonneError, TonneResult};
use tonne_types::units::{CM2, SECOND};

/// Candidate underground laboratories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HostingLab {
    /// Laboratorio Subterraneo de Canfranc.
    Lsc,
    /// Laboratori Nazionali del Gran Sasso.
    Lngs,
    /// SNOLAB, Sudbury.
    Snolab,
}

impl HostingLab {
    pub const ALL: [HostingLab; 3] = [HostingLab::Lsc, HostingLab::Lngs, HostingLab::Snolab];

    pub fn as_str(&self) -> &'static str {
        match self {
            HostingLab::Lsc => "LSC",
            HostingLab::Lngs => "LNGS",
            HostingLab::Snolab => "SNOLAB",
        }
    }
}

impl FromStr for HostingLab {
    type Err = TonneError;

    fn from_str(s: &str) -> TonneResult<Self> {
        match s {
            "LSC" => Ok(HostingLab::Lsc),
            "LNGS" => Ok(HostingLab::Lngs),
            "SNOLAB" => Ok(HostingLab::Snolab),
            other => Err(TonneError::unknown_key("hosting lab", other)),
        }
    }
}

impl fmt::Display for HostingLab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measured muon flux [internal 1/(area time)].
pub fn muon_flux(lab: HostingLab) -> f64 {
    match lab {
        HostingLab::Lsc => 4.810e-7 / CM2 / SECOND,
        // Borexino measurement.
        HostingLab::Lngs => 3.432e-8 / CM2 / SECOND,
        // SNO measurement.
        HostingLab::Snolab => 3.31e-10 / CM2 / SECOND,
    }
}

/// Uncertainty on the measured muon flux.
pub fn muon_flux_error(lab: HostingLab) -> f64 {
    match lab {
        HostingLab::Lsc => 0.1e-7 / CM2 / SECOND,
        HostingLab::Lngs => 0.003e-8 / CM2 / SECOND,
        HostingLab::Snolab => 0.1e-10 / CM2 / SECOND,
    }
}

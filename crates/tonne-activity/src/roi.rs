// ─────────────────────────────────────────────────────────────────────
// NEXT-Tonne Backgrounds — ROI Settings
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Region-of-interest energy windows around the Qbb peak.
//!
//! The window depends only on the energy resolution, common to every
//! detector variant and spatial definition. Resolutions form a closed
//! discrete set; anything else is a lookup error, never an interpolation.

use tonne_types::error::{TonneError, TonneResult};
use tonne_types::units::KEV;

/// Energy resolutions [% FWHM] with a tabulated window.
pub const ROI_RESOLUTIONS: [f64; 5] = [0.5, 0.7, 1.0, 2.0, 3.0];

/// ROI energy window [internal energy units].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiWindow {
    pub e_min: f64,
    pub e_max: f64,
}

impl RoiWindow {
    pub fn width(&self) -> f64 {
        self.e_max - self.e_min
    }
}

/// ROI window for an exact tabulated resolution.
pub fn roi_window(energy_res: f64) -> TonneResult<RoiWindow> {
    let (e_min_kev, e_max_kev) = if energy_res == 0.5 {
        (2454.0, 2471.0)
    } else if energy_res == 0.7 {
        (2453.0, 2475.0)
    } else if energy_res == 1.0 {
        (2446.0, 2471.0)
    } else if energy_res == 2.0 {
        (2433.0, 2482.0)
    } else if energy_res == 3.0 {
        (2421.0, 2495.0)
    } else {
        return Err(TonneError::unknown_key(
            "energy resolution",
            format!("{energy_res}"),
        ));
    };

    Ok(RoiWindow {
        e_min: e_min_kev * KEV,
        e_max: e_max_kev * KEV,
    })
}

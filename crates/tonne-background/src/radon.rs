// ─────────────────────────────────────────────────────────────────────
// NEXT-Tonne Backgrounds — Radon Background
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Radon background estimation.
//!
//! Gas-system radon is already a whole-detector level and passes through
//! untouched; degassing radon scales with the surface facing the active
//! volume, both readout planes plus the lateral field-cage wall.

use tonne_activity::radon::{radon_activity, RadonActivity, RadonLevel};
use tonne_geometry::dimensions::{DerivationConstants, DetectorGeometry, DetectorName};
use tonne_types::error::TonneResult;

/// Radon background level [internal activity units].
pub fn radon_background(name: DetectorName, level: RadonLevel) -> f64 {
    match radon_activity(level) {
        RadonActivity::Absolute(activity) => activity,
        RadonActivity::PerSurface(activity) => {
            let geom = DetectorGeometry::for_detector(name, &DerivationConstants::default());
            activity * geom.inner_surface()
        }
    }
}

/// String-keyed entry point; unknown keys fail, nothing defaults.
pub fn radon_background_level(det_name: &str, level: &str) -> TonneResult<f64> {
    let name: DetectorName = det_name.parse()?;
    let level: RadonLevel = level.parse()?;
    Ok(radon_background(name, level))
}

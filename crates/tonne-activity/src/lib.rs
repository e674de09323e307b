// ─────────────────────────────────────────────────────────────────────
// NEXT-Tonne Backgrounds — Tonne Activity
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Static radio-purity data: the two assay-table generations, radon
//! activities, per-lab muon fluxes, ROI windows, and the externally
//! supplied rejection-factor tables.

pub mod muon_flux;
pub mod radiogenic;
pub mod radon;
pub mod rejection;
pub mod roi;
pub mod screening;

/// Activity of the two relevant decay-chain isotopes for one material.
/// Per unit mass for bulk materials, per unit area for dice boards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsotopeActivity {
    /// Tl208 activity (thorium chain).
    pub tl208: f64,
    /// Bi214 activity (uranium chain).
    pub bi214: f64,
}

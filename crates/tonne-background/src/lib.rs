// ─────────────────────────────────────────────────────────────────────
// NEXT-Tonne Backgrounds — Tonne Background
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
pub mod aggregate;
pub mod muon;
pub mod radon;
pub mod table;

pub use aggregate::{
    background_table, radiogenic_background_level, screening_background_level, ActivityTable,
};
pub use muon::{muon_background, muon_config, run_muon_background, LabSimulation};
pub use radon::{radon_background, radon_background_level};
pub use table::{BackgroundRow, BackgroundTable, Component, Isotope};

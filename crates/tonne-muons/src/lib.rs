// ─────────────────────────────────────────────────────────────────────
// NEXT-Tonne Backgrounds — Tonne Muons
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
pub mod histogram;
pub mod normalization;
pub mod spectra;

pub use normalization::{
    xe137_normalization, xe137_normalization_with_breakdown, BinStatus, EnergyBin,
    Xe137Normalization, Xe137Summary, SECONDS_PER_YEAR,
};
pub use spectra::MuonSpectra;

// ─────────────────────────────────────────────────────────────────────
// NEXT-Tonne Backgrounds — Muon Normalization Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{TonneError, TonneResult};

/// Energy binning given as a range plus a bin-edge count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BinRange {
    /// Lowest bin edge [GeV].
    pub lo: f64,
    /// Highest bin edge [GeV].
    pub hi: f64,
    /// Number of bin edges (bins + 1).
    pub edges: usize,
}

/// Handoff configuration for the muon-to-Xe137 normalization step.
///
/// This file is the only persisted intermediate artifact in the pipeline:
/// the background orchestrator writes it, the normalization routine reads
/// it back. Either `bin_edges` or `bin_range` must be present; explicit
/// edges win when both are given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuonNormalizationConfig {
    /// Simulated muon flux spectra (npz, partitions `muon_flux_0..9`).
    pub flux_file: String,
    /// Simulated Xe137 activation events (npz, array `Xemunrg` [MeV]).
    pub acti_file: String,
    /// Per-bin breakdown output location (npz).
    pub file_out: String,
    /// Muons thrown in the activation simulation.
    pub n_simulated_muons: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin_edges: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin_range: Option<BinRange>,
    /// Space `bin_range` edges logarithmically instead of linearly.
    #[serde(default)]
    pub log_bins: bool,
    /// Measured lab muon flux [1/(cm^2 s)].
    pub lab_flux: f64,
    /// Uncertainty on the measured lab flux [1/(cm^2 s)].
    pub lab_flux_err: f64,
    /// Muon generation surface [cm^2].
    pub gen_area: f64,
}

impl MuonNormalizationConfig {
    /// Load from a JSON handoff file.
    pub fn from_file(path: &str) -> TonneResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Write to a JSON handoff file.
    pub fn write_file(&self, path: &str) -> TonneResult<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve the energy bin edges [GeV].
    ///
    /// Explicit `bin_edges` take precedence; otherwise `bin_range` is
    /// expanded linearly, or in log10 space when `log_bins` is set.
    /// The result must hold at least two strictly increasing edges.
    pub fn resolve_bin_edges(&self) -> TonneResult<Vec<f64>> {
        let edges = if let Some(edges) = &self.bin_edges {
            edges.clone()
        } else if let Some(range) = &self.bin_range {
            if self.log_bins {
                if range.lo <= 0.0 {
                    return Err(TonneError::ConfigError(format!(
                        "Log binning needs a positive lower edge, got {}",
                        range.lo
                    )));
                }
                let exponents =
                    ndarray::Array1::linspace(range.lo.log10(), range.hi.log10(), range.edges);
                exponents.mapv(|x| 10f64.powf(x)).to_vec()
            } else {
                ndarray::Array1::linspace(range.lo, range.hi, range.edges).to_vec()
            }
        } else {
            return Err(TonneError::ConfigError(
                "Either bin_edges or bin_range must be configured".to_string(),
            ));
        };

        validate_bin_edges(&edges)?;
        Ok(edges)
    }
}

/// Bin edges must be finite and strictly increasing, with at least one bin.
pub fn validate_bin_edges(edges: &[f64]) -> TonneResult<()> {
    if edges.len() < 2 {
        return Err(TonneError::MalformedTable(format!(
            "Need at least 2 bin edges, got {}",
            edges.len()
        )));
    }
    for pair in edges.windows(2) {
        if !pair[0].is_finite() || !pair[1].is_finite() || pair[1] <= pair[0] {
            return Err(TonneError::MalformedTable(format!(
                "Bin edges must increase strictly: {} then {}",
                pair[0], pair[1]
            )));
        }
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────
// NEXT-Tonne Backgrounds — Muon Background Orchestration
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cosmogenic Xe137 background via the muon activation normalization.
//!
//! Builds the handoff configuration from the water-shielded geometry and
//! the hosting lab's measured flux, persists it, and hands it to the
//! normalization in totals-only mode. The config file stores raw numbers
//! in the normalization's working units: flux per cm^2 per second, area
//! in cm^2.

use tonne_activity::muon_flux::{muon_flux, muon_flux_error, HostingLab};
use tonne_geometry::dimensions::{DerivationConstants, DetectorName, ShieldedGeometry};
use tonne_muons::normalization::xe137_normalization;
use tonne_types::config::MuonNormalizationConfig;
use tonne_types::error::TonneResult;
use tonne_types::units::{CM2, SECOND};

/// Energy bin edges of the shared muon binning [GeV]: one underflow-free
/// bin from 1 to 100, then 100 GeV steps up to 3 TeV.
pub const MUON_BIN_EDGES_GEV: [f64; 31] = [
    1.0, 100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0, 1000.0, 1100.0, 1200.0,
    1300.0, 1400.0, 1500.0, 1600.0, 1700.0, 1800.0, 1900.0, 2000.0, 2100.0, 2200.0, 2300.0,
    2400.0, 2500.0, 2600.0, 2700.0, 2800.0, 2900.0, 3000.0,
];

/// Pre-simulated inputs available for one hosting lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabSimulation {
    pub flux_file: &'static str,
    pub acti_file: &'static str,
    pub out_file: &'static str,
    pub n_simulated_muons: usize,
}

/// Simulation inventory per lab. The LSC entry reuses the LNGS spectral
/// shape; only the measured flux differs between the two sites.
pub fn lab_simulation(lab: HostingLab) -> LabSimulation {
    match lab {
        HostingLab::Lsc => LabSimulation {
            flux_file: "./muons/lngs_100Mmuons.npz",
            acti_file: "./muons/xe137_count_sim87799000muons.npz",
            out_file: "./muons/lsc_xe137.npz",
            n_simulated_muons: 87_799_000,
        },
        HostingLab::Lngs => LabSimulation {
            flux_file: "./muons/lngs_100Mmuons.npz",
            acti_file: "./muons/xe137_count_sim87799000muons.npz",
            out_file: "./muons/lngs_xe137.npz",
            n_simulated_muons: 87_799_000,
        },
        HostingLab::Snolab => LabSimulation {
            flux_file: "./muons/snolab_100Mmuons.npz",
            acti_file: "./muons/xe137_count_sim87799000muons.npz",
            out_file: "./muons/snolab_xe137.npz",
            n_simulated_muons: 87_799_000,
        },
    }
}

/// Handoff configuration for one detector at one hosting lab.
pub fn muon_config(name: DetectorName, lab: HostingLab) -> MuonNormalizationConfig {
    let geom = ShieldedGeometry::for_detector(name, &DerivationConstants::default());
    let sim = lab_simulation(lab);

    MuonNormalizationConfig {
        flux_file: sim.flux_file.to_string(),
        acti_file: sim.acti_file.to_string(),
        file_out: sim.out_file.to_string(),
        n_simulated_muons: sim.n_simulated_muons,
        bin_edges: Some(MUON_BIN_EDGES_GEV.to_vec()),
        bin_range: None,
        log_bins: false,
        lab_flux: muon_flux(lab) * CM2 * SECOND,
        lab_flux_err: muon_flux_error(lab) * CM2 * SECOND,
        gen_area: geom.muon_veto_surface / CM2,
    }
}

/// Persist a handoff config, read it back, and run the normalization in
/// totals-only mode. Returns the Xe137 production rate and uncertainty
/// [1/s].
pub fn run_muon_background(
    config: &MuonNormalizationConfig,
    config_path: &str,
) -> TonneResult<(f64, f64)> {
    config.write_file(config_path)?;
    let handoff = MuonNormalizationConfig::from_file(config_path)?;
    let summary = xe137_normalization(&handoff)?;
    Ok((summary.per_second, summary.per_second_err))
}

/// Expected Xe137 background for one detector at one hosting lab [1/s].
pub fn muon_background(
    name: DetectorName,
    lab: HostingLab,
    config_path: &str,
) -> TonneResult<(f64, f64)> {
    run_muon_background(&muon_config(name, lab), config_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_carries_lab_flux_as_raw_number() {
        let config = muon_config(DetectorName::NextHd, HostingLab::Lngs);
        assert!((config.lab_flux - 3.432e-8).abs() < 1e-18);
        assert!((config.lab_flux_err - 0.003e-8).abs() < 1e-20);
    }

    #[test]
    fn test_config_area_is_veto_surface_in_cm2() {
        let geom =
            ShieldedGeometry::for_detector(DetectorName::NextHd, &DerivationConstants::default());
        let config = muon_config(DetectorName::NextHd, HostingLab::Lsc);
        assert_eq!(config.gen_area, geom.muon_veto_surface / CM2);
        // A tank around a few-meter vessel spans hundreds of thousands of cm^2.
        assert!(config.gen_area > 1.0e5);
    }

    #[test]
    fn test_config_binning_matches_shared_edges() {
        let config = muon_config(DetectorName::Next2x2, HostingLab::Snolab);
        let edges = config.resolve_bin_edges().unwrap();
        assert_eq!(edges.len(), 31);
        assert_eq!(edges[0], 1.0);
        assert_eq!(edges[30], 3000.0);
        assert!(!config.log_bins);
    }

    #[test]
    fn test_lsc_reuses_lngs_spectrum() {
        let lsc = lab_simulation(HostingLab::Lsc);
        let lngs = lab_simulation(HostingLab::Lngs);
        assert_eq!(lsc.flux_file, lngs.flux_file);
        assert_ne!(lsc.out_file, lngs.out_file);
    }

    #[test]
    fn test_handoff_file_round_trip() {
        let config = muon_config(DetectorName::NextHd, HostingLab::Lngs);
        let path = std::env::temp_dir().join(format!("tonne_handoff_{}.json", std::process::id()));
        let path = path.to_string_lossy().to_string();

        config.write_file(&path).unwrap();
        let loaded = MuonNormalizationConfig::from_file(&path).unwrap();

        assert_eq!(loaded.n_simulated_muons, config.n_simulated_muons);
        assert_eq!(loaded.bin_edges, config.bin_edges);
        assert_eq!(loaded.lab_flux, config.lab_flux);
        assert_eq!(loaded.gen_area, config.gen_area);

        std::fs::remove_file(&path).ok();
    }
}

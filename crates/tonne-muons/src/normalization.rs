// ─────────────────────────────────────────────────────────────────────
// NEXT-Tonne Backgrounds — Xe137 Activation Normalization
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rescaling of simulated Xe137 activation statistics to the measured
//! lab muon flux.
//!
//! Per energy bin: activation probability = activations / resampled
//! simulated muons; muon rate = normalized flux shape x measured flux x
//! generation area; production = probability x rate. Relative Poisson
//! errors combine in quadrature at every product, and bins are summed as
//! independent for the totals. A bin with a zero denominator is flagged
//! undefined and excluded from the totals instead of poisoning them.

use ndarray::Array1;
use ndarray_npy::NpzWriter;
use rand::Rng;
use std::fs::File;

use tonne_types::config::MuonNormalizationConfig;
use tonne_types::error::{TonneError, TonneResult};

use crate::histogram::{bin_index, histogram};
use crate::spectra::MuonSpectra;

/// Calendar-year scale for the per-year production figures.
pub const SECONDS_PER_YEAR: f64 = 3.1536e7;

/// Validity of the ratio chain in one energy bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinStatus {
    /// All ratios defined.
    Ok,
    /// No simulated activation fell here; the bin contributes zero.
    NoActivation,
    /// Zero resampled muons: activation probability is undefined.
    UndefinedActivation,
    /// Zero flux counts: the flux shape is undefined here.
    UndefinedFlux,
}

impl BinStatus {
    /// Bins that may enter the aggregate sums.
    pub fn is_defined(&self) -> bool {
        matches!(self, BinStatus::Ok | BinStatus::NoActivation)
    }
}

/// Full derivation chain for one energy bin.
#[derive(Debug, Clone)]
pub struct EnergyBin {
    /// Lower bin edge [GeV].
    pub bin_min: f64,
    /// Upper bin edge [GeV].
    pub bin_max: f64,
    /// Resampled simulated muons in this bin.
    pub sim_muons: u64,
    /// Simulated Xe137 activations in this bin.
    pub activation_count: u64,
    /// Combined flux-spectrum counts in this bin.
    pub flux_count: u64,
    /// Xe137 activations per simulated muon.
    pub activation_prob: f64,
    pub activation_prob_err: f64,
    /// Share of the flux shape in this bin.
    pub norm_flux: f64,
    pub norm_flux_err: f64,
    /// Muon flux in the lab [1/(cm^2 s)].
    pub flux_per_cm2_s: f64,
    pub flux_per_cm2_s_err: f64,
    /// Muons crossing the generation surface [1/s].
    pub muon_rate: f64,
    pub muon_rate_err: f64,
    /// Xe137 production [1/s].
    pub xe137_per_s: f64,
    pub xe137_per_s_err: f64,
    /// Xe137 production [1/calendar year].
    pub xe137_per_year: f64,
    pub xe137_per_year_err: f64,
    pub status: BinStatus,
}

/// Aggregate Xe137 production totals.
#[derive(Debug, Clone, Copy)]
pub struct Xe137Summary {
    pub per_second: f64,
    pub per_second_err: f64,
    pub per_year: f64,
    pub per_year_err: f64,
    /// Bins excluded from the totals for undefined ratios.
    pub undefined_bins: usize,
}

/// Normalization result with the per-bin breakdown.
#[derive(Debug, Clone)]
pub struct Xe137Normalization {
    pub edges: Vec<f64>,
    pub bins: Vec<EnergyBin>,
    pub summary: Xe137Summary,
}

impl Xe137Normalization {
    /// Xe137 production rate of bin `i` [1/s], failing with the
    /// undefined-ratio error when the bin had an empty denominator.
    pub fn bin_rate(&self, i: usize) -> TonneResult<f64> {
        let bin = self.bins.get(i).ok_or_else(|| TonneError::UndefinedRatio {
            bin: i,
            message: format!("only {} bins available", self.bins.len()),
        })?;
        match bin.status {
            BinStatus::UndefinedActivation => Err(TonneError::UndefinedRatio {
                bin: i,
                message: "no resampled muons in bin".to_string(),
            }),
            BinStatus::UndefinedFlux => Err(TonneError::UndefinedRatio {
                bin: i,
                message: "no flux counts in bin".to_string(),
            }),
            BinStatus::Ok | BinStatus::NoActivation => Ok(bin.xe137_per_s),
        }
    }
}

/// Histogram of uniform energy draws standing in for the simulated muon
/// spectrum denominator.
pub fn resample_simulated_muons<R: Rng + ?Sized>(
    rng: &mut R,
    edges: &[f64],
    n_muons: usize,
) -> Vec<u64> {
    let lo = edges[0];
    let hi = edges[edges.len() - 1];
    let mut counts = vec![0u64; edges.len() - 1];
    for _ in 0..n_muons {
        let energy = rng.gen_range(lo..hi);
        if let Some(idx) = bin_index(energy, edges) {
            counts[idx] += 1;
        }
    }
    counts
}

/// Run the normalization over loaded spectra.
pub fn normalize(
    spectra: &MuonSpectra,
    config: &MuonNormalizationConfig,
) -> TonneResult<Xe137Normalization> {
    normalize_with_rng(spectra, config, &mut rand::thread_rng())
}

/// Run the normalization with a caller-supplied random source.
pub fn normalize_with_rng<R: Rng + ?Sized>(
    spectra: &MuonSpectra,
    config: &MuonNormalizationConfig,
    rng: &mut R,
) -> TonneResult<Xe137Normalization> {
    let edges = config.resolve_bin_edges()?;
    if config.n_simulated_muons == 0 {
        return Err(TonneError::ConfigError(
            "n_simulated_muons must be positive".to_string(),
        ));
    }
    if config.lab_flux <= 0.0 {
        return Err(TonneError::ConfigError(format!(
            "lab_flux must be positive, got {}",
            config.lab_flux
        )));
    }

    let n_bins = edges.len() - 1;
    let sim_counts = resample_simulated_muons(rng, &edges, config.n_simulated_muons);
    let activation_counts = histogram(spectra.activation_energies.iter().copied(), &edges);

    // All partitions accumulate into one explicitly zeroed histogram.
    let mut flux_counts = vec![0u64; n_bins];
    for partition in &spectra.flux_partitions {
        let partial = histogram(partition.iter().copied(), &edges);
        for (total, count) in flux_counts.iter_mut().zip(partial) {
            *total += count;
        }
    }
    let flux_total: u64 = flux_counts.iter().sum();
    if flux_total == 0 {
        return Err(TonneError::MalformedTable(
            "Flux spectra produced an empty histogram over the configured bins".to_string(),
        ));
    }

    let mut bins = Vec::with_capacity(n_bins);
    for i in 0..n_bins {
        let sim_muons = sim_counts[i];
        let activation_count = activation_counts[i];
        let flux_count = flux_counts[i];

        let status = if sim_muons == 0 {
            BinStatus::UndefinedActivation
        } else if flux_count == 0 {
            BinStatus::UndefinedFlux
        } else if activation_count == 0 {
            BinStatus::NoActivation
        } else {
            BinStatus::Ok
        };

        let (activation_prob, activation_prob_err) = if sim_muons > 0 && activation_count > 0 {
            let prob = activation_count as f64 / sim_muons as f64;
            let rel = (1.0 / activation_count as f64 + 1.0 / sim_muons as f64).sqrt();
            (prob, prob * rel)
        } else {
            (0.0, 0.0)
        };

        let (norm_flux, norm_flux_err) = if flux_count > 0 {
            let share = flux_count as f64 / flux_total as f64;
            let rel = (1.0 / flux_count as f64 + 1.0 / flux_total as f64).sqrt();
            (share, share * rel)
        } else {
            (0.0, 0.0)
        };

        let flux_per_cm2_s = norm_flux * config.lab_flux;
        let flux_per_cm2_s_err = if norm_flux > 0.0 {
            flux_per_cm2_s
                * ((norm_flux_err / norm_flux).powi(2)
                    + (config.lab_flux_err / config.lab_flux).powi(2))
                .sqrt()
        } else {
            0.0
        };

        // The generation surface is an exact constant.
        let muon_rate = flux_per_cm2_s * config.gen_area;
        let muon_rate_err = flux_per_cm2_s_err * config.gen_area;

        let xe137_per_s = activation_prob * muon_rate;
        let xe137_per_s_err = if activation_prob > 0.0 && muon_rate > 0.0 {
            xe137_per_s
                * ((activation_prob_err / activation_prob).powi(2)
                    + (muon_rate_err / muon_rate).powi(2))
                .sqrt()
        } else {
            0.0
        };

        bins.push(EnergyBin {
            bin_min: edges[i],
            bin_max: edges[i + 1],
            sim_muons,
            activation_count,
            flux_count,
            activation_prob,
            activation_prob_err,
            norm_flux,
            norm_flux_err,
            flux_per_cm2_s,
            flux_per_cm2_s_err,
            muon_rate,
            muon_rate_err,
            xe137_per_s,
            xe137_per_s_err,
            xe137_per_year: xe137_per_s * SECONDS_PER_YEAR,
            xe137_per_year_err: xe137_per_s_err * SECONDS_PER_YEAR,
            status,
        });
    }

    let per_second: f64 = bins
        .iter()
        .filter(|b| b.status.is_defined())
        .map(|b| b.xe137_per_s)
        .sum();
    let per_second_err = bins
        .iter()
        .filter(|b| b.status.is_defined())
        .map(|b| b.xe137_per_s_err * b.xe137_per_s_err)
        .sum::<f64>()
        .sqrt();
    let undefined_bins = bins.iter().filter(|b| !b.status.is_defined()).count();

    let summary = Xe137Summary {
        per_second,
        per_second_err,
        per_year: per_second * SECONDS_PER_YEAR,
        per_year_err: per_second_err * SECONDS_PER_YEAR,
        undefined_bins,
    };

    Ok(Xe137Normalization {
        edges,
        bins,
        summary,
    })
}

/// Totals-only entry point: load the spectra named by the config, run the
/// normalization, and return the summary. No breakdown is written.
pub fn xe137_normalization(config: &MuonNormalizationConfig) -> TonneResult<Xe137Summary> {
    let spectra = MuonSpectra::load(&config.flux_file, &config.acti_file)?;
    Ok(normalize(&spectra, config)?.summary)
}

/// Full entry point: additionally writes the per-bin breakdown to the
/// configured output archive.
pub fn xe137_normalization_with_breakdown(
    config: &MuonNormalizationConfig,
) -> TonneResult<Xe137Normalization> {
    let spectra = MuonSpectra::load(&config.flux_file, &config.acti_file)?;
    let result = normalize(&spectra, config)?;
    write_breakdown(&config.file_out, &result)?;
    Ok(result)
}

/// Persist the per-bin breakdown as an npz of column arrays.
pub fn write_breakdown(path: &str, result: &Xe137Normalization) -> TonneResult<()> {
    let file = File::create(path)?;
    let mut writer = NpzWriter::new(file);

    let column = |f: &dyn Fn(&EnergyBin) -> f64| -> Array1<f64> {
        result.bins.iter().map(|b| f(b)).collect()
    };

    let columns: [(&str, Array1<f64>); 18] = [
        ("bin_min", column(&|b| b.bin_min)),
        ("bin_max", column(&|b| b.bin_max)),
        ("n_sim_muons", column(&|b| b.sim_muons as f64)),
        ("n_xe137", column(&|b| b.activation_count as f64)),
        ("n_flux", column(&|b| b.flux_count as f64)),
        ("xe137_per_mu", column(&|b| b.activation_prob)),
        ("err137_per_mu", column(&|b| b.activation_prob_err)),
        ("norm_flux", column(&|b| b.norm_flux)),
        ("flux_err", column(&|b| b.norm_flux_err)),
        ("flux_per_cm2_per_s", column(&|b| b.flux_per_cm2_s)),
        ("flux_cm2_s_err", column(&|b| b.flux_per_cm2_s_err)),
        ("flux_per_s", column(&|b| b.muon_rate)),
        ("flux_s_err", column(&|b| b.muon_rate_err)),
        ("xe137_per_s", column(&|b| b.xe137_per_s)),
        ("xe137_s_err", column(&|b| b.xe137_per_s_err)),
        ("xe137_per_y", column(&|b| b.xe137_per_year)),
        ("xe137_y_err", column(&|b| b.xe137_per_year_err)),
        (
            "defined",
            column(&|b| if b.status.is_defined() { 1.0 } else { 0.0 }),
        ),
    ];

    for (name, array) in columns {
        writer.add_array(name, &array).map_err(|e| {
            TonneError::MalformedTable(format!("Failed to write column {name}: {e}"))
        })?;
    }
    writer
        .finish()
        .map_err(|e| TonneError::MalformedTable(format!("Failed to finish breakdown: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::spectra::FLUX_PARTITIONS;

    fn test_config(n_muons: usize) -> MuonNormalizationConfig {
        MuonNormalizationConfig {
            flux_file: String::new(),
            acti_file: String::new(),
            file_out: String::new(),
            n_simulated_muons: n_muons,
            bin_edges: Some(vec![0.0, 1.0, 2.0, 3.0]),
            bin_range: None,
            log_bins: false,
            lab_flux: 3.432e-8,
            lab_flux_err: 0.003e-8,
            gen_area: 2.5e6,
        }
    }

    /// Every partition holds the same three energies, one per bin, so the
    /// combined flux histogram is flat and nowhere zero.
    fn flat_spectra() -> MuonSpectra {
        MuonSpectra {
            flux_partitions: vec![array![0.5, 1.5, 2.5]; FLUX_PARTITIONS],
            activation_energies: array![0.5, 0.5, 1.5, 2.5, 2.5, 2.5],
        }
    }

    #[test]
    fn test_resampling_conserves_draws() {
        let mut rng = StdRng::seed_from_u64(7);
        let edges = [0.0, 1.0, 2.0, 3.0];
        let counts = resample_simulated_muons(&mut rng, &edges, 10_000);
        assert_eq!(counts.iter().sum::<u64>(), 10_000);
        for (i, &count) in counts.iter().enumerate() {
            assert!(count > 3_000, "Bin {i} suspiciously empty: {count}");
        }
    }

    #[test]
    fn test_activation_probability_is_exact_ratio() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = normalize_with_rng(&flat_spectra(), &test_config(30_000), &mut rng).unwrap();

        let expected_counts = [2u64, 1, 3];
        for (bin, expected) in result.bins.iter().zip(expected_counts) {
            assert_eq!(bin.activation_count, expected);
            assert!(bin.sim_muons > 0);
            assert_eq!(bin.status, BinStatus::Ok);
            assert_eq!(
                bin.activation_prob,
                expected as f64 / bin.sim_muons as f64,
                "Probability must be the exact count ratio"
            );
            let rel = (1.0 / expected as f64 + 1.0 / bin.sim_muons as f64).sqrt();
            assert!((bin.activation_prob_err - bin.activation_prob * rel).abs() < 1e-18);
        }
    }

    #[test]
    fn test_flux_shape_is_flat_and_normalized() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = normalize_with_rng(&flat_spectra(), &test_config(30_000), &mut rng).unwrap();

        let total_share: f64 = result.bins.iter().map(|b| b.norm_flux).sum();
        assert!((total_share - 1.0).abs() < 1e-12);
        for bin in &result.bins {
            assert_eq!(bin.flux_count, FLUX_PARTITIONS as u64);
            assert!((bin.norm_flux - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_total_error_adds_in_quadrature() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = normalize_with_rng(&flat_spectra(), &test_config(30_000), &mut rng).unwrap();

        let expected_rate: f64 = result.bins.iter().map(|b| b.xe137_per_s).sum();
        let expected_err = result
            .bins
            .iter()
            .map(|b| b.xe137_per_s_err.powi(2))
            .sum::<f64>()
            .sqrt();

        assert_eq!(result.summary.per_second, expected_rate);
        assert_eq!(result.summary.per_second_err, expected_err);
        assert_eq!(result.summary.undefined_bins, 0);
    }

    #[test]
    fn test_year_scale_factor() {
        let mut rng = StdRng::seed_from_u64(3);
        let result = normalize_with_rng(&flat_spectra(), &test_config(30_000), &mut rng).unwrap();

        assert_eq!(
            result.summary.per_year,
            result.summary.per_second * SECONDS_PER_YEAR
        );
        for bin in &result.bins {
            assert_eq!(bin.xe137_per_year, bin.xe137_per_s * SECONDS_PER_YEAR);
        }
    }

    #[test]
    fn test_rate_chain_composes() {
        let mut rng = StdRng::seed_from_u64(11);
        let config = test_config(30_000);
        let result = normalize_with_rng(&flat_spectra(), &config, &mut rng).unwrap();

        for bin in &result.bins {
            assert_eq!(bin.flux_per_cm2_s, bin.norm_flux * config.lab_flux);
            assert_eq!(bin.muon_rate, bin.flux_per_cm2_s * config.gen_area);
            assert_eq!(bin.xe137_per_s, bin.activation_prob * bin.muon_rate);
        }
    }

    #[test]
    fn test_bin_rate_reports_undefined_ratios() {
        let spectra = MuonSpectra {
            flux_partitions: vec![array![0.5, 2.5]; FLUX_PARTITIONS],
            activation_energies: array![0.5, 1.5, 2.5],
        };
        let mut rng = StdRng::seed_from_u64(5);
        let result = normalize_with_rng(&spectra, &test_config(30_000), &mut rng).unwrap();

        assert!(result.bin_rate(0).unwrap() > 0.0);
        assert!(matches!(
            result.bin_rate(1),
            Err(TonneError::UndefinedRatio { bin: 1, .. })
        ));
        assert!(matches!(
            result.bin_rate(99),
            Err(TonneError::UndefinedRatio { bin: 99, .. })
        ));
    }

    #[test]
    fn test_zero_flux_bin_is_flagged_not_poisonous() {
        // No flux entry ever lands in the middle bin.
        let spectra = MuonSpectra {
            flux_partitions: vec![array![0.5, 2.5]; FLUX_PARTITIONS],
            activation_energies: array![0.5, 1.5, 2.5],
        };
        let mut rng = StdRng::seed_from_u64(5);
        let result = normalize_with_rng(&spectra, &test_config(30_000), &mut rng).unwrap();

        assert_eq!(result.bins[1].status, BinStatus::UndefinedFlux);
        assert_eq!(result.bins[1].xe137_per_s, 0.0);
        assert_eq!(result.summary.undefined_bins, 1);
        assert!(result.summary.per_second.is_finite());
        assert!(result.summary.per_second_err.is_finite());
        assert!(result.summary.per_second > 0.0);
    }

    #[test]
    fn test_zero_denominator_bins_are_flagged() {
        // A single resampled muon leaves two of the three bins without a
        // denominator.
        let mut rng = StdRng::seed_from_u64(9);
        let result = normalize_with_rng(&flat_spectra(), &test_config(1), &mut rng).unwrap();

        let undefined = result
            .bins
            .iter()
            .filter(|b| b.status == BinStatus::UndefinedActivation)
            .count();
        assert_eq!(undefined, 2);
        assert_eq!(result.summary.undefined_bins, 2);
        for bin in &result.bins {
            if bin.status == BinStatus::UndefinedActivation {
                assert_eq!(bin.sim_muons, 0);
                assert_eq!(bin.activation_prob, 0.0);
                assert_eq!(bin.xe137_per_s, 0.0);
            }
        }
        assert!(result.summary.per_second.is_finite());
    }

    #[test]
    fn test_no_activation_bin_contributes_zero() {
        let spectra = MuonSpectra {
            flux_partitions: vec![array![0.5, 1.5, 2.5]; FLUX_PARTITIONS],
            // Nothing activates in the middle bin.
            activation_energies: array![0.5, 2.5],
        };
        let mut rng = StdRng::seed_from_u64(21);
        let result = normalize_with_rng(&spectra, &test_config(30_000), &mut rng).unwrap();

        assert_eq!(result.bins[1].status, BinStatus::NoActivation);
        assert_eq!(result.bins[1].xe137_per_s, 0.0);
        assert_eq!(result.bins[1].xe137_per_s_err, 0.0);
        // Defined bins still carry the flux chain.
        assert!(result.bins[1].muon_rate > 0.0);
        assert_eq!(result.summary.undefined_bins, 0);
    }

    #[test]
    fn test_empty_flux_histogram_fails() {
        let spectra = MuonSpectra {
            // All flux energies outside the binning.
            flux_partitions: vec![array![50.0]; FLUX_PARTITIONS],
            activation_energies: array![0.5],
        };
        let mut rng = StdRng::seed_from_u64(2);
        let result = normalize_with_rng(&spectra, &test_config(100), &mut rng);
        assert!(matches!(result, Err(TonneError::MalformedTable(_))));
    }

    #[test]
    fn test_zero_lab_flux_rejected() {
        let mut config = test_config(100);
        config.lab_flux = 0.0;
        let mut rng = StdRng::seed_from_u64(2);
        let result = normalize_with_rng(&flat_spectra(), &config, &mut rng);
        assert!(matches!(result, Err(TonneError::ConfigError(_))));
    }

    #[test]
    fn test_breakdown_round_trip() {
        use ndarray_npy::NpzReader;

        let mut rng = StdRng::seed_from_u64(17);
        let result = normalize_with_rng(&flat_spectra(), &test_config(30_000), &mut rng).unwrap();

        let path = std::env::temp_dir().join(format!(
            "tonne_breakdown_{}.npz",
            std::process::id()
        ));
        write_breakdown(path.to_str().unwrap(), &result).unwrap();

        let file = File::open(&path).unwrap();
        let mut npz = NpzReader::new(file).unwrap();
        let rates: Array1<f64> = npz
            .by_name::<ndarray::OwnedRepr<f64>, ndarray::Ix1>("xe137_per_s.npy")
            .or_else(|_| npz.by_name::<ndarray::OwnedRepr<f64>, ndarray::Ix1>("xe137_per_s"))
            .unwrap();
        assert_eq!(rates.len(), result.bins.len());
        for (stored, bin) in rates.iter().zip(&result.bins) {
            assert_eq!(*stored, bin.xe137_per_s);
        }

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_spectra_file_pipeline() {
        let stamp = std::process::id();
        let flux_path = std::env::temp_dir().join(format!("tonne_norm_flux_{stamp}.npz"));
        let acti_path = std::env::temp_dir().join(format!("tonne_norm_acti_{stamp}.npz"));

        let file = File::create(&flux_path).unwrap();
        let mut writer = NpzWriter::new(file);
        for i in 0..FLUX_PARTITIONS {
            writer
                .add_array(format!("muon_flux_{i}"), &array![0.5, 1.5, 2.5])
                .unwrap();
        }
        writer.finish().unwrap();

        let file = File::create(&acti_path).unwrap();
        let mut writer = NpzWriter::new(file);
        // 500, 1500, 2500 GeV in MeV.
        writer
            .add_array("Xemunrg", &array![5.0e5, 1.5e6, 2.5e6])
            .unwrap();
        writer.finish().unwrap();

        let mut config = test_config(10_000);
        config.flux_file = flux_path.to_string_lossy().to_string();
        config.acti_file = acti_path.to_string_lossy().to_string();
        config.bin_edges = Some(vec![0.0, 1000.0, 2000.0, 3000.0]);

        let summary = xe137_normalization(&config).unwrap();
        assert!(summary.per_second > 0.0);
        assert!(summary.per_second_err > 0.0);
        assert_eq!(summary.undefined_bins, 0);

        std::fs::remove_file(&flux_path).ok();
        std::fs::remove_file(&acti_path).ok();
    }
}

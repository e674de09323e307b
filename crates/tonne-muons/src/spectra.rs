// ─────────────────────────────────────────────────────────────────────
// NEXT-Tonne Backgrounds — Simulated Spectra IO
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pre-simulated muon spectra archives.
//!
//! The flux archive carries ten spectrum partitions `muon_flux_0` ..
//! `muon_flux_9` (muon energies, GeV). The activation archive carries
//! one array `Xemunrg`, the muon energy at each Xe137 activation [MeV],
//! rescaled to GeV on load so all downstream binning shares one scale.

use ndarray::Array1;
use ndarray_npy::NpzReader;
use std::fs::File;

use tonne_types::error::{TonneError, TonneResult};

/// Number of spectrum partitions in a flux archive.
pub const FLUX_PARTITIONS: usize = 10;

/// Array name of the activation energies.
pub const ACTIVATION_KEY: &str = "Xemunrg";

const MEV_TO_GEV: f64 = 1.0e-3;

/// In-memory simulated spectra for one normalization run.
#[derive(Debug, Clone)]
pub struct MuonSpectra {
    /// Muon energies per flux partition [GeV].
    pub flux_partitions: Vec<Array1<f64>>,
    /// Muon energy at each simulated Xe137 activation [GeV].
    pub activation_energies: Array1<f64>,
}

impl MuonSpectra {
    /// Load flux and activation archives from npz files.
    pub fn load(flux_path: &str, acti_path: &str) -> TonneResult<MuonSpectra> {
        let file = File::open(flux_path)?;
        let mut flux_npz = NpzReader::new(file).map_err(|e| {
            TonneError::MalformedTable(format!("Failed to open flux archive '{flux_path}': {e}"))
        })?;

        let mut flux_partitions = Vec::with_capacity(FLUX_PARTITIONS);
        for i in 0..FLUX_PARTITIONS {
            flux_partitions.push(read_array1(&mut flux_npz, &format!("muon_flux_{i}"))?);
        }

        let file = File::open(acti_path)?;
        let mut acti_npz = NpzReader::new(file).map_err(|e| {
            TonneError::MalformedTable(format!(
                "Failed to open activation archive '{acti_path}': {e}"
            ))
        })?;
        let activation_energies =
            read_array1(&mut acti_npz, ACTIVATION_KEY)?.mapv(|e| e * MEV_TO_GEV);

        Ok(MuonSpectra {
            flux_partitions,
            activation_energies,
        })
    }
}

fn read_array1(npz: &mut NpzReader<File>, key: &str) -> TonneResult<Array1<f64>> {
    npz.by_name::<ndarray::OwnedRepr<f64>, ndarray::Ix1>(&format!("{key}.npy"))
        .or_else(|_| npz.by_name::<ndarray::OwnedRepr<f64>, ndarray::Ix1>(key))
        .map_err(|e| TonneError::MalformedTable(format!("Failed to read {key} from npz: {e}")))
}

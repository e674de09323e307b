// ─────────────────────────────────────────────────────────────────────
// NEXT-Tonne Backgrounds — Histogram Arithmetic
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed-edge counting histograms.
//!
//! Binning convention: bin i covers [edges[i], edges[i+1]), except the
//! last bin which also includes its upper edge. Values outside the edge
//! span are dropped. The flux, activation, and resampled-muon histograms
//! all share one set of edges, so the three countings stay aligned.

/// Bin index for a value, or None when it falls outside the edges.
pub fn bin_index(value: f64, edges: &[f64]) -> Option<usize> {
    let n = edges.len();
    if n < 2 || value < edges[0] || value > edges[n - 1] {
        return None;
    }
    if value == edges[n - 1] {
        return Some(n - 2);
    }
    Some(edges.partition_point(|&e| e <= value) - 1)
}

/// Count values into bins defined by `edges`.
pub fn histogram<I>(values: I, edges: &[f64]) -> Vec<u64>
where
    I: IntoIterator<Item = f64>,
{
    let mut counts = vec![0u64; edges.len().saturating_sub(1)];
    for value in values {
        if let Some(idx) = bin_index(value, edges) {
            counts[idx] += 1;
        }
    }
    counts
}

// ─────────────────────────────────────────────────────────────────────
// NEXT-Tonne Backgrounds — Rejection Factors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Externally supplied analysis rejection factors.
//!
//! One delimited text table per detector, keyed by source, energy
//! resolution and spatial definition; `#` starts a comment line. The
//! whole file is rejected on any structural problem, no partial tables.

use std::path::Path;
use std::str::FromStr;

use tonne_types::error::{TonneError, TonneResult};
use tonne_geometry::dimensions::DetectorName;

const KEY_COLUMNS: [&str; 3] = ["source", "energyRes", "spatialDef"];

/// One keyed row of rejection factors.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectionRow {
    pub source: String,
    pub energy_res: f64,
    pub spatial_def: String,
    pub factors: Vec<f64>,
}

/// Parsed rejection-factor table for one detector.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectionFactors {
    /// Names of the factor columns, after the three key columns.
    pub columns: Vec<String>,
    rows: Vec<RejectionRow>,
}

impl RejectionFactors {
    /// Parse a rejection-factor table from delimited text.
    pub fn parse(contents: &str) -> TonneResult<RejectionFactors> {
        let mut lines = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        let header = lines
            .next()
            .ok_or_else(|| TonneError::MalformedTable("Empty rejection table".to_string()))?;
        let header_fields: Vec<&str> = header.split(',').map(str::trim).collect();
        if header_fields.len() <= KEY_COLUMNS.len()
            || header_fields[..KEY_COLUMNS.len()] != KEY_COLUMNS
        {
            return Err(TonneError::MalformedTable(format!(
                "Rejection table header must start with {:?} and carry at least one factor column, got '{header}'",
                KEY_COLUMNS
            )));
        }
        let columns: Vec<String> = header_fields[KEY_COLUMNS.len()..]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut rows = Vec::new();
        for line in lines {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() != header_fields.len() {
                return Err(TonneError::MalformedTable(format!(
                    "Row '{line}' has {} fields, expected {}",
                    fields.len(),
                    header_fields.len()
                )));
            }
            let energy_res = f64::from_str(fields[1]).map_err(|_| {
                TonneError::MalformedTable(format!("Bad energy resolution '{}'", fields[1]))
            })?;
            let factors = fields[KEY_COLUMNS.len()..]
                .iter()
                .map(|field| {
                    f64::from_str(field).map_err(|_| {
                        TonneError::MalformedTable(format!("Bad rejection factor '{field}'"))
                    })
                })
                .collect::<TonneResult<Vec<f64>>>()?;

            rows.push(RejectionRow {
                source: fields[0].to_string(),
                energy_res,
                spatial_def: fields[2].to_string(),
                factors,
            });
        }

        Ok(RejectionFactors { columns, rows })
    }

    /// Load the table for a named detector from its conventional location.
    pub fn from_file(path: &Path) -> TonneResult<RejectionFactors> {
        let contents = std::fs::read_to_string(path)?;
        RejectionFactors::parse(&contents)
    }

    /// Conventional file name for a detector's rejection table.
    pub fn table_name(det: DetectorName) -> String {
        format!("rejection_factors.{det}.csv")
    }

    pub fn rows(&self) -> &[RejectionRow] {
        &self.rows
    }

    /// Row for an exact (source, energyRes, spatialDef) key.
    pub fn row(
        &self,
        source: &str,
        energy_res: f64,
        spatial_def: &str,
    ) -> TonneResult<&RejectionRow> {
        self.rows
            .iter()
            .find(|row| {
                row.source == source
                    && row.energy_res == energy_res
                    && row.spatial_def == spatial_def
            })
            .ok_or_else(|| {
                TonneError::unknown_key(
                    "rejection factor",
                    format!("({source}, {energy_res}, {spatial_def})"),
                )
            })
    }

    /// Single factor by key and column name.
    pub fn factor(
        &self,
        source: &str,
        energy_res: f64,
        spatial_def: &str,
        column: &str,
    ) -> TonneResult<f64> {
        let row = self.row(source, energy_res, spatial_def)?;
        let idx = self
            .columns
            .iter()
            .position(|name| name == column)
            .ok_or_else(|| TonneError::unknown_key("rejection column", column))?;
        Ok(row.factors[idx])
    }
}

// ─────────────────────────────────────────────────────────────────────
// NEXT-Tonne Backgrounds — Radiogenic Budget Aggregation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Mass-or-surface times activity, per component and isotope.
//!
//! The table generation fixes both the activity values and the detector
//! materials: the assay generation runs a PTFE field cage and leaves the
//! steel cathode out of scope, the screening generation runs HDPE and
//! budgets the cathode. Readout planes always enter with both endcaps.

use tonne_activity::radiogenic::{radiogenic_activities, RadiogenicLevel};
use tonne_activity::screening::{screening_activities, ScreeningLevel};
use tonne_activity::IsotopeActivity;
use tonne_geometry::dimensions::{
    DerivationConstants, DetectorGeometry, DetectorName, FieldCageMaterial,
};
use tonne_types::error::TonneResult;
use tonne_types::units::BECQUEREL;

use crate::table::{BackgroundRow, BackgroundTable, Component};

/// Activity-table generation selector. The two generations use distinct
/// level vocabularies and different per-material unit conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityTable {
    /// Assay-based generation.
    Radiogenic(RadiogenicLevel),
    /// Screening-limit generation.
    Screening(ScreeningLevel),
}

impl ActivityTable {
    /// Field-cage material in force for this table generation.
    pub fn field_cage_material(&self) -> FieldCageMaterial {
        match self {
            ActivityTable::Radiogenic(_) => FieldCageMaterial::Teflon,
            ActivityTable::Screening(_) => FieldCageMaterial::Hdpe,
        }
    }
}

fn row(component: Component, scale: f64, activity: IsotopeActivity) -> BackgroundRow {
    BackgroundRow {
        component,
        tl208: scale * activity.tl208 / BECQUEREL,
        bi214: scale * activity.bi214 / BECQUEREL,
    }
}

/// Assemble the component-by-isotope budget for one detector and table
/// generation. Geometry is derived once and only read afterwards.
pub fn background_table(name: DetectorName, table: ActivityTable) -> BackgroundTable {
    let consts = DerivationConstants {
        field_cage_material: table.field_cage_material(),
        ..DerivationConstants::default()
    };
    let geom = DetectorGeometry::for_detector(name, &consts);

    let rows = match table {
        ActivityTable::Radiogenic(level) => {
            let act = radiogenic_activities(level);
            vec![
                row(
                    Component::ReadoutPlane,
                    geom.readout_plane_surface * 2.0,
                    act.dice_board,
                ),
                row(Component::FieldCage, geom.field_cage_mass, act.teflon),
                row(Component::InnerShielding, geom.ics_mass, act.copper),
            ]
        }
        ActivityTable::Screening(level) => {
            let act = screening_activities(level);
            vec![
                row(
                    Component::ReadoutPlane,
                    geom.readout_plane_surface * 2.0,
                    act.dice_board,
                ),
                row(Component::Cathode, geom.cathode_mass, act.ssteel316ti),
                row(Component::FieldCage, geom.field_cage_mass, act.hdpe),
                row(Component::InnerShielding, geom.ics_mass, act.copper),
            ]
        }
    };

    BackgroundTable::new(rows)
}

/// String-keyed entry point over the assay generation. Unknown detector
/// or level keys fail before any row is produced.
pub fn radiogenic_background_level(det_name: &str, level: &str) -> TonneResult<BackgroundTable> {
    let name: DetectorName = det_name.parse()?;
    let level: RadiogenicLevel = level.parse()?;
    Ok(background_table(name, ActivityTable::Radiogenic(level)))
}

/// String-keyed entry point over the screening generation.
pub fn screening_background_level(det_name: &str, level: &str) -> TonneResult<BackgroundTable> {
    let name: DetectorName = det_name.parse()?;
    let level: ScreeningLevel = level.parse()?;
    Ok(background_table(name, ActivityTable::Screening(level)))
}

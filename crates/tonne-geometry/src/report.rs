// ─────────────────────────────────────────────────────────────────────
// NEXT-Tonne Backgrounds — Geometry Report
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Human-readable geometry listings, grouped layer by layer.

use std::fmt;

use tonne_types::units::{CM, CM2, CM3, KG, M2};

use crate::dimensions::{DetectorGeometry, ShieldedGeometry};

impl fmt::Display for DetectorGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "* ACTIVE")?;
        writeln!(f, "  diameter = {:.4} cm", self.active_diam / CM)?;
        writeln!(f, "  length   = {:.4} cm", self.active_length / CM)?;
        writeln!(f, "  volume   = {:.4} cm^3", self.active_volume / CM3)?;
        writeln!(f, "  mass     = {:.4} kg", self.active_mass / KG)?;

        writeln!(f, "* READOUT_PLANE")?;
        writeln!(f, "  surface = {:.4} cm^2", self.readout_plane_surface / CM2)?;

        writeln!(f, "* CATHODE")?;
        writeln!(f, "  volume = {:.4} cm^3", self.cathode_volume / CM3)?;
        writeln!(f, "  mass   = {:.4} kg", self.cathode_mass / KG)?;

        writeln!(f, "* FIELD_CAGE")?;
        writeln!(f, "  thickness = {:.4} cm", self.field_cage_thickness / CM)?;
        writeln!(f, "  inner rad = {:.4} cm", self.field_cage_inner_rad / CM)?;
        writeln!(f, "  outer rad = {:.4} cm", self.field_cage_outer_rad / CM)?;
        writeln!(f, "  length    = {:.4} cm", self.field_cage_length / CM)?;
        writeln!(f, "  volume    = {:.4} cm^3", self.field_cage_volume / CM3)?;
        writeln!(f, "  mass      = {:.4} kg", self.field_cage_mass / KG)?;

        writeln!(f, "* INNER_SHIELDING")?;
        writeln!(f, "  thickness         = {:.4} cm", self.ics_thickness / CM)?;
        writeln!(f, "  inner rad         = {:.4} cm", self.ics_inner_rad / CM)?;
        writeln!(f, "  outer rad         = {:.4} cm", self.ics_outer_rad / CM)?;
        writeln!(f, "  inner length      = {:.4} cm", self.ics_inner_length / CM)?;
        writeln!(f, "  outer length      = {:.4} cm", self.ics_outer_length / CM)?;
        writeln!(
            f,
            "  inner endcap surf = {:.4} cm^2",
            self.ics_inner_endcap_surface / CM2
        )?;
        writeln!(
            f,
            "  outer endcap surf = {:.4} cm^2",
            self.ics_outer_endcap_surface / CM2
        )?;
        writeln!(f, "  volume            = {:.4} cm^3", self.ics_volume / CM3)?;
        writeln!(f, "  mass              = {:.4} kg", self.ics_mass / KG)?;

        writeln!(f, "* VESSEL")?;
        writeln!(f, "  thickness    = {:.4} cm", self.vessel_thickness / CM)?;
        writeln!(f, "  inner rad    = {:.4} cm", self.vessel_inner_rad / CM)?;
        writeln!(f, "  outer rad    = {:.4} cm", self.vessel_outer_rad / CM)?;
        writeln!(f, "  inner length = {:.4} cm", self.vessel_inner_length / CM)?;
        writeln!(f, "  outer length = {:.4} cm", self.vessel_outer_length / CM)?;
        writeln!(f, "  volume       = {:.4} cm^3", self.vessel_volume / CM3)?;
        write!(f, "  mass         = {:.4} kg", self.vessel_mass / KG)
    }
}

impl fmt::Display for ShieldedGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.detector)?;
        writeln!(f, "* WATER_TANK")?;
        writeln!(f, "  envelope    = {:.4} cm", self.tank_envelope / CM)?;
        writeln!(f, "  inner diam  = {:.4} cm", self.tank_inner_diam / CM)?;
        writeln!(f, "  outer diam  = {:.4} cm", self.tank_outer_diam / CM)?;
        writeln!(f, "  top surface = {:.4} m^2", self.tank_top_surface / M2)?;
        writeln!(f, "* MUON_VETO")?;
        write!(f, "  surface = {:.4} m^2", self.muon_veto_surface / M2)
    }
}

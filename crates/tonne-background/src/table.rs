// ─────────────────────────────────────────────────────────────────────
// NEXT-Tonne Backgrounds — Background Table
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Result table of the radiogenic budget: component rows, isotope
//! columns, cells in becquerel.

use std::fmt;

/// Tracked detector components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    ReadoutPlane,
    Cathode,
    FieldCage,
    InnerShielding,
}

impl Component {
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::ReadoutPlane => "READOUT_PLANE",
            Component::Cathode => "CATHODE",
            Component::FieldCage => "FIELD_CAGE",
            Component::InnerShielding => "INNER_SHIELDING",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Budgeted isotopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Isotope {
    Tl208,
    Bi214,
}

impl Isotope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Isotope::Tl208 => "Tl208",
            Isotope::Bi214 => "Bi214",
        }
    }
}

impl fmt::Display for Isotope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One component row of the budget [Bq].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundRow {
    pub component: Component,
    pub tl208: f64,
    pub bi214: f64,
}

/// Component-by-isotope background budget [Bq].
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundTable {
    rows: Vec<BackgroundRow>,
}

impl BackgroundTable {
    pub fn new(rows: Vec<BackgroundRow>) -> BackgroundTable {
        BackgroundTable { rows }
    }

    pub fn rows(&self) -> &[BackgroundRow] {
        &self.rows
    }

    /// Rate for one cell, None when the component is not tracked.
    pub fn rate(&self, component: Component, isotope: Isotope) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.component == component)
            .map(|row| match isotope {
                Isotope::Tl208 => row.tl208,
                Isotope::Bi214 => row.bi214,
            })
    }

    /// Column sum over every tracked component.
    pub fn total(&self, isotope: Isotope) -> f64 {
        self.rows
            .iter()
            .map(|row| match isotope {
                Isotope::Tl208 => row.tl208,
                Isotope::Bi214 => row.bi214,
            })
            .sum()
    }
}

impl fmt::Display for BackgroundTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<16} {:>12} {:>12}", "source", "Tl208", "Bi214")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<16} {:>12.4e} {:>12.4e}",
                row.component.as_str(),
                row.tl208,
                row.bi214
            )?;
        }
        write!(
            f,
            "{:<16} {:>12.4e} {:>12.4e}",
            "total",
            self.total(Isotope::Tl208),
            self.total(Isotope::Bi214)
        )
    }
}

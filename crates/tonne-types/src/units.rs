// ─────────────────────────────────────────────────────────────────────
// NEXT-Tonne Backgrounds — Unit System
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Geant4-convention internal unit system: millimeter = nanosecond = MeV = 1.
//!
//! Every quantity in the background model is stored in these internal units.
//! Multiply by a constant to enter the system, divide to present a value
//! in that unit: `2.6 * M` stores a length, `mass / KG` prints kilograms.

/// Millimeter, the base length unit.
pub const MM: f64 = 1.0;

/// Centimeter.
pub const CM: f64 = 10.0 * MM;

/// Meter.
pub const M: f64 = 1000.0 * MM;

/// Square centimeter.
pub const CM2: f64 = CM * CM;

/// Square meter.
pub const M2: f64 = M * M;

/// Cubic centimeter.
pub const CM3: f64 = CM * CM * CM;

/// Cubic meter.
pub const M3: f64 = M * M * M;

/// Nanosecond, the base time unit.
pub const NANOSECOND: f64 = 1.0;

/// Second.
pub const SECOND: f64 = 1.0e9 * NANOSECOND;

/// Mega-electronvolt, the base energy unit.
pub const MEV: f64 = 1.0;

/// Kilo-electronvolt.
pub const KEV: f64 = 1.0e-3 * MEV;

/// Joule expressed in MeV (1 MeV = 1.602176634e-13 J, CODATA exact).
pub const JOULE: f64 = MEV / 1.602_176_634e-13;

/// Kilogram: J s^2 / m^2 in internal units.
pub const KG: f64 = JOULE * SECOND * SECOND / (M * M);

/// Gram.
pub const GRAM: f64 = 1.0e-3 * KG;

/// Becquerel, one decay per second.
pub const BECQUEREL: f64 = 1.0 / SECOND;

/// Millibecquerel, the natural scale of radio-assay results.
pub const MILLIBECQUEREL: f64 = 1.0e-3 * BECQUEREL;

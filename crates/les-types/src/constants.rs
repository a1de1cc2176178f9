// ─────────────────────────────────────────────────────────────────────
// SCPN Ocean LES — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Reference seawater density (kg/m³)
pub const RHO_SEAWATER: f64 = 1026.0;

/// Seawater specific heat capacity (J/K/kg)
pub const CP_SEAWATER: f64 = 3991.0;

/// Air density at the sea surface (kg/m³)
pub const RHO_AIR: f64 = 1.225;

/// Linear equation of state: thermal expansion coefficient (1/K)
pub const THERMAL_EXPANSION: f64 = 2e-4;

/// Linear equation of state: haline contraction coefficient (1/psu)
pub const HALINE_CONTRACTION: f64 = 8e-4;

/// Gravitational acceleration (m/s²)
pub const GRAVITY: f64 = 9.81;

/// Bulk drag coefficient for 10 m wind stress
pub const DRAG_COEFFICIENT: f64 = 2.5e-3;

/// Mid-latitude Coriolis parameter (1/s)
pub const CORIOLIS_F: f64 = 1e-4;

/// Seconds per hour
pub const HOUR: f64 = 3600.0;

/// Seconds per minute
pub const MINUTE: f64 = 60.0;

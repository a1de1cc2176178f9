// ─────────────────────────────────────────────────────────────────────
// SCPN Ocean LES — Surface Forcing
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form surface and bottom fluxes for wind mixing and convection.
//!
//! Sign convention: a positive flux leaves the ocean through the surface.
//! Cooling (Q > 0) therefore gives a positive temperature flux, and a
//! wind blowing towards +x gives a negative momentum flux.

use les_types::config::ScenarioConfig;

/// Kinematic temperature flux Q / (ρ₀ cₚ) [K m/s].
pub fn temperature_flux(heat_flux: f64, reference_density: f64, heat_capacity: f64) -> f64 {
    heat_flux / (reference_density * heat_capacity)
}

/// Kinematic momentum flux from a bulk drag law [m²/s²].
pub fn momentum_flux(
    air_density: f64,
    reference_density: f64,
    drag_coefficient: f64,
    wind_speed: f64,
) -> f64 {
    -air_density / reference_density * drag_coefficient * wind_speed * wind_speed.abs()
}

/// Salinity flux due to evaporation [psu m/s]; depends on the local surface salinity.
pub fn salinity_flux(salinity: f64, evaporation_rate: f64) -> f64 {
    -evaporation_rate * salinity
}

/// Surface and bottom boundary fluxes of one scenario.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceForcing {
    /// Jᵀ [K m/s]
    pub temperature_flux: f64,
    /// Jᵘ [m²/s²]
    pub momentum_flux: f64,
    /// Evaporation rate used in Jˢ(S) [m/s]
    pub evaporation_rate: f64,
    /// Bottom temperature gradient dT/dz [K/m]
    pub bottom_temperature_gradient: f64,
    /// Coriolis parameter f [1/s]
    pub coriolis: f64,
    thermal_expansion: f64,
    haline_contraction: f64,
    gravity: f64,
}

impl SurfaceForcing {
    pub fn from_config(cfg: &ScenarioConfig) -> Self {
        let b = &cfg.buoyancy;
        let f = &cfg.forcing;
        SurfaceForcing {
            temperature_flux: temperature_flux(f.heat_flux, b.reference_density, b.heat_capacity),
            momentum_flux: momentum_flux(
                f.air_density,
                b.reference_density,
                f.drag_coefficient,
                f.wind_speed,
            ),
            evaporation_rate: f.evaporation_rate,
            bottom_temperature_gradient: cfg.initial.temperature_gradient,
            coriolis: f.coriolis,
            thermal_expansion: b.thermal_expansion,
            haline_contraction: b.haline_contraction,
            gravity: b.gravity,
        }
    }

    /// Jˢ at a surface cell with salinity `s`.
    pub fn salinity_flux(&self, s: f64) -> f64 {
        salinity_flux(s, self.evaporation_rate)
    }

    /// Water-side friction velocity u* = sqrt(|Jᵘ|) [m/s].
    pub fn friction_velocity(&self) -> f64 {
        self.momentum_flux.abs().sqrt()
    }

    /// Inertial period 2π/|f| [s]; infinite without rotation.
    pub fn inertial_period(&self) -> f64 {
        if self.coriolis == 0.0 {
            f64::INFINITY
        } else {
            std::f64::consts::TAU / self.coriolis.abs()
        }
    }

    /// Surface buoyancy flux g (α Jᵀ − β Jˢ) [m²/s³] for surface salinity `s`.
    /// Positive values drive convection.
    pub fn buoyancy_flux(&self, s: f64) -> f64 {
        self.gravity
            * (self.thermal_expansion * self.temperature_flux
                - self.haline_contraction * self.salinity_flux(s))
    }
}

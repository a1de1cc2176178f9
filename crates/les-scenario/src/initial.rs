// ─────────────────────────────────────────────────────────────────────
// SCPN Ocean LES — Initial Conditions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Stratified temperature and noisy velocity initial state.
//!
//! Noise is shaped by Ξ(z) = r (z/Lz)(1 + z/Lz) with r ~ N(0, 1), so it
//! vanishes at the surface and at the bottom and peaks at mid-depth.

use les_types::config::ScenarioConfig;
use les_types::error::LesResult;
use les_types::state::{FieldSnapshot, Grid3D};
use ndarray::Array3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use tracing::debug;

use crate::forcing::SurfaceForcing;

/// Depth-shaped noise Ξ(z) for one normal draw `r`.
pub fn noise_shape(z: f64, lz: f64, r: f64) -> f64 {
    let s = z / lz;
    r * s * (1.0 + s)
}

/// Closed-form initial fields of a scenario.
#[derive(Debug, Clone, Copy)]
pub struct InitialProfile {
    pub surface_temperature: f64,
    pub temperature_gradient: f64,
    pub salinity: f64,
    pub temperature_noise: f64,
    pub velocity_noise: f64,
    pub friction_velocity: f64,
    pub lz: f64,
}

impl InitialProfile {
    pub fn from_config(cfg: &ScenarioConfig) -> Self {
        let ic = &cfg.initial;
        InitialProfile {
            surface_temperature: ic.surface_temperature,
            temperature_gradient: ic.temperature_gradient,
            salinity: ic.salinity,
            temperature_noise: ic.temperature_noise,
            velocity_noise: ic.velocity_noise,
            friction_velocity: SurfaceForcing::from_config(cfg).friction_velocity(),
            lz: cfg.grid.extent[2],
        }
    }

    /// T(z) = T₀ + dT/dz·z + dT/dz·Lz·ε_T·Ξ(z).
    pub fn temperature(&self, z: f64, r: f64) -> f64 {
        self.surface_temperature
            + self.temperature_gradient * z
            + self.temperature_gradient
                * self.lz
                * self.temperature_noise
                * noise_shape(z, self.lz, r)
    }

    /// u(z) = u*·ε_u·Ξ(z).
    pub fn velocity(&self, z: f64, r: f64) -> f64 {
        self.friction_velocity * self.velocity_noise * noise_shape(z, self.lz, r)
    }
}

/// Build the initial snapshot using `rng` for the noise draws.
/// Salinity is uniform and w starts at rest.
pub fn initial_state<R: Rng>(cfg: &ScenarioConfig, grid: &Grid3D, rng: &mut R) -> FieldSnapshot {
    let profile = InitialProfile::from_config(cfg);
    let shape = (grid.nx, grid.ny, grid.nz);

    let mut draw = || rng.sample::<f64, _>(StandardNormal);
    let t = Array3::from_shape_fn(shape, |(_, _, k)| profile.temperature(grid.z[k], draw()));
    let u = Array3::from_shape_fn(shape, |(_, _, k)| profile.velocity(grid.z[k], draw()));
    let v = Array3::from_shape_fn(shape, |(_, _, k)| profile.velocity(grid.z[k], draw()));

    debug!(
        nx = grid.nx,
        ny = grid.ny,
        nz = grid.nz,
        u_star = profile.friction_velocity,
        "built initial state"
    );

    FieldSnapshot {
        time: 0.0,
        u,
        v,
        w: Array3::zeros(shape),
        t,
        s: Array3::from_elem(shape, profile.salinity),
    }
}

/// Reproducible initial snapshot seeded from `initial.seed`.
pub fn seeded_initial_state(cfg: &ScenarioConfig) -> LesResult<(Grid3D, FieldSnapshot)> {
    cfg.validate()?;
    let grid = cfg.create_grid();
    let mut rng = StdRng::seed_from_u64(cfg.initial.seed);
    let state = initial_state(cfg, &grid, &mut rng);
    Ok((grid, state))
}

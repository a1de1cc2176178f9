// ─────────────────────────────────────────────────────────────────────
// SCPN Ocean LES — Scenario Setup
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Everything a wind-mixing and convection run is parameterized by,
//! assembled from one validated config.

use les_types::config::ScenarioConfig;
use les_types::error::LesResult;
use les_types::state::{FieldSnapshot, Grid3D};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::forcing::SurfaceForcing;
use crate::initial::{initial_state, InitialProfile};
use crate::timestep::{Schedule, TimeStepWizard};

#[derive(Debug, Clone)]
pub struct Scenario {
    pub config: ScenarioConfig,
    pub grid: Grid3D,
    pub forcing: SurfaceForcing,
    pub initial: InitialProfile,
    pub wizard: TimeStepWizard,
    pub schedule: Schedule,
}

impl Scenario {
    pub fn new(config: ScenarioConfig) -> LesResult<Self> {
        config.validate()?;
        let grid = config.create_grid();
        let forcing = SurfaceForcing::from_config(&config);
        let initial = InitialProfile::from_config(&config);
        let wizard = TimeStepWizard::from_config(&config.time)?;
        let schedule = Schedule::from_config(&config.time)?;

        info!(
            size = ?config.grid.size,
            extent = ?config.grid.extent,
            temperature_flux = forcing.temperature_flux,
            momentum_flux = forcing.momentum_flux,
            coriolis = forcing.coriolis,
            frames = schedule.frame_count(),
            "scenario configured"
        );

        Ok(Scenario {
            config,
            grid,
            forcing,
            initial,
            wizard,
            schedule,
        })
    }

    pub fn from_file(path: &str) -> LesResult<Self> {
        Self::new(ScenarioConfig::from_file(path)?)
    }

    /// Initial snapshot seeded from the config.
    pub fn initial_state(&self) -> FieldSnapshot {
        let mut rng = StdRng::seed_from_u64(self.config.initial.seed);
        initial_state(&self.config, &self.grid, &mut rng)
    }

    /// Advective CFL of the initial step on this grid for a given peak speed.
    pub fn initial_cfl(&self, max_speed: f64) -> LesResult<f64> {
        crate::timestep::advective_cfl(
            self.config.time.initial_dt,
            max_speed,
            self.grid.min_spacing(),
        )
    }
}

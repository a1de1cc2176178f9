// ─────────────────────────────────────────────────────────────────────
// SCPN Ocean LES — Property-Based Tests (proptest) for les-scenario
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for les-scenario using proptest.
//!
//! Covers: time-step wizard bounds, surface flux signs, initial-state
//! noise envelope and profile diagnostics.

use les_scenario::diagnostics::{mean_profiles, temperature_gradient_profile};
use les_scenario::forcing::{momentum_flux, temperature_flux};
use les_scenario::initial::noise_shape;
use les_scenario::timestep::{Schedule, TimeStepWizard};
use les_scenario::Scenario;
use les_types::config::ScenarioConfig;
use proptest::prelude::*;

// ── Time Step Wizard ─────────────────────────────────────────────────

proptest! {
    /// New step stays within [min_change·Δt, min(max_change·Δt, max_dt)].
    #[test]
    fn wizard_respects_change_limits(
        dt in 0.1f64..50.0,
        speed in 0.0f64..5.0,
        spacing in 0.1f64..10.0,
    ) {
        let wizard = TimeStepWizard::default();
        let next = wizard.next_dt(dt, speed, spacing).unwrap();

        prop_assert!(next <= wizard.max_change() * dt + 1e-12);
        prop_assert!(next <= wizard.max_dt() + 1e-12);
        prop_assert!(next >= (wizard.min_change() * dt).min(wizard.max_dt()) - 1e-12);
        prop_assert!(next > 0.0);
    }

    /// When no limit binds, the step lands on the target CFL.
    #[test]
    fn wizard_hits_target_cfl(speed in 0.05f64..0.5) {
        let wizard = TimeStepWizard::default();
        let target = wizard.cfl() * 1.0 / speed;
        let next = wizard.next_dt(target, speed, 1.0).unwrap();
        let expected = target.min(wizard.max_dt());
        prop_assert!((next - expected).abs() < 1e-9, "next = {}, expected {}", next, expected);
    }

    /// Any accepted schedule has a finite frame list ending at or before stop.
    #[test]
    fn schedule_frames_end_before_stop(interval in 1.0f64..600.0, stop in 1.0f64..10_000.0) {
        let schedule = Schedule::new(interval, stop).unwrap();
        let times = schedule.output_times();
        prop_assert_eq!(times.len(), schedule.frame_count());
        prop_assert_eq!(times[0], 0.0);
        prop_assert!(times[times.len() - 1] <= stop + 1e-6);
    }

    /// Non-positive intervals never yield a schedule.
    #[test]
    fn schedule_rejects_non_positive_interval(interval in -100.0f64..=0.0) {
        prop_assert!(Schedule::new(interval, 600.0).is_err());
    }
}

// ── Surface Fluxes ───────────────────────────────────────────────────

proptest! {
    /// Cooling leaves the ocean as a positive temperature flux.
    #[test]
    fn temperature_flux_sign_follows_heat_flux(q in -1000.0f64..1000.0) {
        let jt = temperature_flux(q, 1026.0, 3991.0);
        prop_assert_eq!(jt > 0.0, q > 0.0);
    }

    /// Momentum flux is odd in wind speed and quadratic in magnitude.
    #[test]
    fn momentum_flux_quadratic(u10 in 0.1f64..40.0) {
        let j1 = momentum_flux(1.225, 1026.0, 2.5e-3, u10);
        let j2 = momentum_flux(1.225, 1026.0, 2.5e-3, 2.0 * u10);
        let jm = momentum_flux(1.225, 1026.0, 2.5e-3, -u10);
        prop_assert!((j2 / j1 - 4.0).abs() < 1e-9);
        prop_assert!((jm + j1).abs() < 1e-15);
    }

    /// |Ξ(z)| never exceeds |r|/4 inside the column.
    #[test]
    fn noise_shape_bounded(z in -100.0f64..0.0, r in -5.0f64..5.0) {
        let xi = noise_shape(z, 100.0, r);
        prop_assert!(xi.abs() <= r.abs() / 4.0 + 1e-12);
    }
}

// ── Initial State and Diagnostics ────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Initial mean temperature gradient equals the configured stratification.
    #[test]
    fn initial_gradient_matches_stratification(
        nz in 2usize..24,
        gradient in 0.001f64..0.05,
        seed in 0u64..1000,
    ) {
        let mut cfg = ScenarioConfig::default();
        cfg.grid.size = [3, 3, nz];
        cfg.initial.temperature_gradient = gradient;
        cfg.initial.seed = seed;
        let scenario = Scenario::new(cfg).unwrap();
        let snap = scenario.initial_state();

        let (_, dtdz) = temperature_gradient_profile(&snap, &scenario.grid).unwrap();
        prop_assert_eq!(dtdz.len(), nz - 1);
        for &g in dtdz.iter() {
            prop_assert!((g - gradient).abs() < 1e-3 * gradient, "dT/dz = {}", g);
        }

        let p = mean_profiles(&snap, &scenario.grid).unwrap();
        prop_assert_eq!(p.t.len(), nz);
    }
}

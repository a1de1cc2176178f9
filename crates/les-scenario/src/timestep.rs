// ─────────────────────────────────────────────────────────────────────
// SCPN Ocean LES — Time Step Control
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Adaptive time-step controller and output schedule.

use les_types::config::TimeConfig;
use les_types::error::{LesError, LesResult};
use tracing::trace;

/// Advective CFL number |u|max Δt / Δ.
pub fn advective_cfl(dt: f64, max_speed: f64, min_spacing: f64) -> LesResult<f64> {
    check_positive("dt", dt)?;
    check_positive("min_spacing", min_spacing)?;
    Ok(max_speed.abs() * dt / min_spacing)
}

fn check_positive(name: &str, value: f64) -> LesResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LesError::InvalidArgument(format!(
            "{name} must be finite and > 0, got {value}"
        )));
    }
    Ok(())
}

/// CFL-targeting time-step wizard.
///
/// The new step aims at `cfl`, never grows by more than `max_change`,
/// never shrinks by more than `min_change` and never exceeds `max_dt`.
#[derive(Debug, Clone, Copy)]
pub struct TimeStepWizard {
    cfl: f64,
    max_change: f64,
    min_change: f64,
    max_dt: f64,
}

impl Default for TimeStepWizard {
    fn default() -> Self {
        let cfg = TimeConfig::default();
        TimeStepWizard {
            cfl: cfg.cfl,
            max_change: cfg.max_change,
            min_change: cfg.min_change,
            max_dt: cfg.max_dt,
        }
    }
}

impl TimeStepWizard {
    /// Requires `cfl > 0`, `max_change >= 1`, `0 < min_change <= 1` and `max_dt > 0`.
    pub fn new(cfl: f64, max_change: f64, min_change: f64, max_dt: f64) -> LesResult<Self> {
        check_positive("cfl", cfl)?;
        check_positive("max_dt", max_dt)?;
        if !max_change.is_finite() || max_change < 1.0 {
            return Err(LesError::InvalidArgument(format!(
                "max_change must be finite and >= 1, got {max_change}"
            )));
        }
        if !min_change.is_finite() || min_change <= 0.0 || min_change > 1.0 {
            return Err(LesError::InvalidArgument(format!(
                "min_change must lie in (0, 1], got {min_change}"
            )));
        }
        Ok(TimeStepWizard {
            cfl,
            max_change,
            min_change,
            max_dt,
        })
    }

    pub fn from_config(cfg: &TimeConfig) -> LesResult<Self> {
        Self::new(cfg.cfl, cfg.max_change, cfg.min_change, cfg.max_dt)
    }

    pub fn cfl(&self) -> f64 {
        self.cfl
    }

    pub fn max_change(&self) -> f64 {
        self.max_change
    }

    pub fn min_change(&self) -> f64 {
        self.min_change
    }

    pub fn max_dt(&self) -> f64 {
        self.max_dt
    }

    /// Next time step given the current step and the largest velocity magnitude.
    pub fn next_dt(&self, current_dt: f64, max_speed: f64, min_spacing: f64) -> LesResult<f64> {
        check_positive("current_dt", current_dt)?;
        check_positive("min_spacing", min_spacing)?;
        if !max_speed.is_finite() {
            return Err(LesError::InvalidArgument(format!(
                "max_speed must be finite, got {max_speed}"
            )));
        }

        let speed = max_speed.abs();
        let target = if speed > 0.0 {
            self.cfl * min_spacing / speed
        } else {
            f64::INFINITY
        };

        let grown = self.max_change * current_dt;
        let shrunk = self.min_change * current_dt;
        let dt = target.min(grown).max(shrunk).min(self.max_dt);

        trace!(current_dt, target, dt, "time step update");
        Ok(dt)
    }
}

/// Upper bound on output frames of one run.
pub const MAX_FRAMES: usize = 10_000_000;

/// Fixed-interval output schedule over a finite run.
#[derive(Debug, Clone, Copy)]
pub struct Schedule {
    interval: f64,
    stop_time: f64,
}

impl Schedule {
    /// Both times must be finite and > 0, with at most `MAX_FRAMES` frames.
    pub fn new(interval: f64, stop_time: f64) -> LesResult<Self> {
        check_positive("interval", interval)?;
        check_positive("stop_time", stop_time)?;
        let frames = stop_time / interval;
        if !frames.is_finite() || frames >= MAX_FRAMES as f64 {
            return Err(LesError::InvalidArgument(format!(
                "stop_time / interval = {frames} exceeds {MAX_FRAMES} output frames"
            )));
        }
        Ok(Schedule {
            interval,
            stop_time,
        })
    }

    pub fn from_config(cfg: &TimeConfig) -> LesResult<Self> {
        Self::new(cfg.output_interval, cfg.stop_time)
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn stop_time(&self) -> f64 {
        self.stop_time
    }

    /// Number of output frames including the initial one at t = 0.
    pub fn frame_count(&self) -> usize {
        (self.stop_time / self.interval + 1e-9).floor() as usize + 1
    }

    /// Times of every output frame.
    pub fn output_times(&self) -> Vec<f64> {
        (0..self.frame_count())
            .map(|n| n as f64 * self.interval)
            .collect()
    }

    /// Whether a step from `t` to `t + dt` crosses or lands on an output time.
    pub fn crosses_output(&self, t: f64, dt: f64) -> bool {
        let before = (t / self.interval + 1e-9).floor();
        let after = ((t + dt) / self.interval + 1e-9).floor();
        after > before && t + dt <= self.stop_time + 1e-9
    }
}

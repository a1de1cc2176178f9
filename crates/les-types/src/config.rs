// ─────────────────────────────────────────────────────────────────────
// SCPN Ocean LES — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    CORIOLIS_F, CP_SEAWATER, DRAG_COEFFICIENT, GRAVITY, HALINE_CONTRACTION, HOUR, MINUTE,
    RHO_AIR, RHO_SEAWATER, THERMAL_EXPANSION,
};
use crate::error::{LesError, LesResult};

/// Top-level wind-mixing and convection scenario.
/// Every table is optional in JSON; missing tables take the reference values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub buoyancy: BuoyancyParams,
    #[serde(default)]
    pub forcing: ForcingParams,
    #[serde(default)]
    pub initial: InitialParams,
    #[serde(default)]
    pub time: TimeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Cell counts (nx, ny, nz)
    pub size: [usize; 3],
    /// Domain extent (Lx, Ly, Lz) in metres; z spans [-Lz, 0]
    pub extent: [f64; 3],
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            size: [32, 32, 32],
            extent: [64.0, 64.0, 32.0],
        }
    }
}

/// Linear equation of state and reference seawater properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuoyancyParams {
    pub reference_density: f64,
    pub heat_capacity: f64,
    pub thermal_expansion: f64,
    pub haline_contraction: f64,
    pub gravity: f64,
}

impl Default for BuoyancyParams {
    fn default() -> Self {
        BuoyancyParams {
            reference_density: RHO_SEAWATER,
            heat_capacity: CP_SEAWATER,
            thermal_expansion: THERMAL_EXPANSION,
            haline_contraction: HALINE_CONTRACTION,
            gravity: GRAVITY,
        }
    }
}

/// Surface forcing. Heat flux is positive for ocean cooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForcingParams {
    /// Surface heat flux [W/m²]
    pub heat_flux: f64,
    /// Wind speed 10 m above the surface [m/s]
    pub wind_speed: f64,
    pub drag_coefficient: f64,
    pub air_density: f64,
    /// Evaporation rate [m/s]
    pub evaporation_rate: f64,
    /// Coriolis parameter [1/s]
    pub coriolis: f64,
}

impl Default for ForcingParams {
    fn default() -> Self {
        ForcingParams {
            heat_flux: 200.0,
            wind_speed: 10.0,
            drag_coefficient: DRAG_COEFFICIENT,
            air_density: RHO_AIR,
            evaporation_rate: 1e-3 / HOUR,
            coriolis: CORIOLIS_F,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialParams {
    /// Surface temperature [°C]
    pub surface_temperature: f64,
    /// Background stratification dT/dz [K/m]
    pub temperature_gradient: f64,
    /// Uniform salinity [psu]
    pub salinity: f64,
    /// Relative noise amplitude on temperature
    pub temperature_noise: f64,
    /// Relative noise amplitude on horizontal velocity
    pub velocity_noise: f64,
    /// RNG seed for reproducible noise
    pub seed: u64,
}

impl Default for InitialParams {
    fn default() -> Self {
        InitialParams {
            surface_temperature: 20.0,
            temperature_gradient: 0.01,
            salinity: 35.0,
            temperature_noise: 1e-6,
            velocity_noise: 1e-3,
            seed: 0,
        }
    }
}

/// Run length, output cadence and adaptive time-step controller settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// Initial time step [s]
    pub initial_dt: f64,
    /// Simulation stop time [s]
    pub stop_time: f64,
    /// Output interval [s]
    pub output_interval: f64,
    pub cfl: f64,
    pub max_change: f64,
    pub min_change: f64,
    /// Upper bound on the time step [s]
    pub max_dt: f64,
}

impl Default for TimeConfig {
    fn default() -> Self {
        TimeConfig {
            initial_dt: 10.0,
            stop_time: 40.0 * MINUTE,
            output_interval: MINUTE,
            cfl: 1.0,
            max_change: 1.1,
            min_change: 0.5,
            max_dt: MINUTE,
        }
    }
}

fn require_positive(key: &str, value: f64) -> LesResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LesError::ConfigError(format!("{key} must be finite and > 0, got {value}")));
    }
    Ok(())
}

fn require_finite(key: &str, value: f64) -> LesResult<()> {
    if !value.is_finite() {
        return Err(LesError::ConfigError(format!("{key} must be finite, got {value}")));
    }
    Ok(())
}

impl ScenarioConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> LesResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        debug!(path, size = ?config.grid.size, "loaded scenario config");
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> LesResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LesResult<()> {
        for (i, &n) in self.grid.size.iter().enumerate() {
            if n == 0 {
                return Err(LesError::ConfigError(format!("grid.size[{i}] must be >= 1")));
            }
        }
        for (i, &l) in self.grid.extent.iter().enumerate() {
            require_positive(&format!("grid.extent[{i}]"), l)?;
        }

        let b = &self.buoyancy;
        require_positive("buoyancy.reference_density", b.reference_density)?;
        require_positive("buoyancy.heat_capacity", b.heat_capacity)?;
        require_finite("buoyancy.thermal_expansion", b.thermal_expansion)?;
        require_finite("buoyancy.haline_contraction", b.haline_contraction)?;
        require_positive("buoyancy.gravity", b.gravity)?;

        let f = &self.forcing;
        require_finite("forcing.heat_flux", f.heat_flux)?;
        require_finite("forcing.wind_speed", f.wind_speed)?;
        require_finite("forcing.drag_coefficient", f.drag_coefficient)?;
        require_positive("forcing.air_density", f.air_density)?;
        require_finite("forcing.evaporation_rate", f.evaporation_rate)?;
        require_finite("forcing.coriolis", f.coriolis)?;

        let ic = &self.initial;
        require_finite("initial.surface_temperature", ic.surface_temperature)?;
        require_finite("initial.temperature_gradient", ic.temperature_gradient)?;
        require_finite("initial.salinity", ic.salinity)?;
        require_finite("initial.temperature_noise", ic.temperature_noise)?;
        require_finite("initial.velocity_noise", ic.velocity_noise)?;

        let t = &self.time;
        require_positive("time.initial_dt", t.initial_dt)?;
        require_positive("time.stop_time", t.stop_time)?;
        require_positive("time.output_interval", t.output_interval)?;
        require_positive("time.cfl", t.cfl)?;
        require_positive("time.max_dt", t.max_dt)?;
        require_positive("time.min_change", t.min_change)?;
        if !t.max_change.is_finite() || t.max_change < 1.0 {
            return Err(LesError::ConfigError(format!(
                "time.max_change must be finite and >= 1, got {}",
                t.max_change
            )));
        }
        if t.min_change > 1.0 {
            return Err(LesError::ConfigError(format!(
                "time.min_change must be <= 1, got {}",
                t.min_change
            )));
        }
        Ok(())
    }

    /// Create a Grid3D from this config's size and extent.
    pub fn create_grid(&self) -> crate::state::Grid3D {
        crate::state::Grid3D::new(self.grid.size, self.grid.extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_reference_scenario() {
        let cfg = ScenarioConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg.grid.size, [32, 32, 32]);
        assert!((cfg.grid.extent[2] - 32.0).abs() < 1e-12);
        assert!((cfg.forcing.heat_flux - 200.0).abs() < 1e-12);
        assert!((cfg.forcing.wind_speed - 10.0).abs() < 1e-12);
        assert!((cfg.buoyancy.reference_density - 1026.0).abs() < 1e-12);
        assert!((cfg.time.stop_time - 2400.0).abs() < 1e-12);
        assert!((cfg.time.max_dt - 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_table_keeps_other_defaults() {
        let cfg = ScenarioConfig::from_json_str(r#"{"forcing": {"heat_flux": -50.0}}"#).unwrap();
        assert!((cfg.forcing.heat_flux + 50.0).abs() < 1e-12);
        assert!((cfg.forcing.drag_coefficient - 2.5e-3).abs() < 1e-15);
        assert!((cfg.initial.salinity - 35.0).abs() < 1e-12);
    }

    #[test]
    fn test_grid_override() {
        let json = r#"{"grid": {"size": [8, 4, 16], "extent": [10.0, 5.0, 20.0]}}"#;
        let cfg = ScenarioConfig::from_json_str(json).unwrap();
        let grid = cfg.create_grid();
        assert_eq!(grid.shape(), [8, 4, 16]);
        assert!((grid.dz - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_zero_grid_size_rejected() {
        let json = r#"{"grid": {"size": [8, 0, 16], "extent": [10.0, 5.0, 20.0]}}"#;
        let err = ScenarioConfig::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("grid.size[1]"), "{err}");
    }

    #[test]
    fn test_negative_extent_rejected() {
        let json = r#"{"grid": {"size": [8, 8, 8], "extent": [10.0, 5.0, -1.0]}}"#;
        let err = ScenarioConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, LesError::ConfigError(_)));
        assert!(err.to_string().contains("grid.extent[2]"), "{err}");
    }

    #[test]
    fn test_max_change_below_one_rejected() {
        let err = ScenarioConfig::from_json_str(r#"{"time": {"max_change": 0.9}}"#).unwrap_err();
        assert!(err.to_string().contains("time.max_change"), "{err}");
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = ScenarioConfig::from_json_str("{ grid: ").unwrap_err();
        assert!(matches!(err, LesError::Json(_)));
    }

    #[test]
    fn test_from_file_roundtrip() {
        let cfg = ScenarioConfig::default();
        let name = format!("les_scenario_{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, serde_json::to_string_pretty(&cfg).unwrap()).unwrap();

        let loaded = ScenarioConfig::from_file(&path.to_string_lossy()).unwrap();
        assert_eq!(loaded.grid.size, cfg.grid.size);
        assert!((loaded.forcing.evaporation_rate - cfg.forcing.evaporation_rate).abs() < 1e-20);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ScenarioConfig::from_file("/no/such/scenario.json").unwrap_err();
        assert!(matches!(err, LesError::Io(_)));
    }
}

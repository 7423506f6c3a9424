//! Grid bounds and simulation tuning.

use serde::{Deserialize, Serialize};

use crate::cell::Coord;
use crate::error::ConfigError;

/// Inclusive rectangle; a `None` side is unbounded.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: Option<i32>,
    pub max_x: Option<i32>,
    pub min_y: Option<i32>,
    pub max_y: Option<i32>,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::square(-50, 50)
    }
}

impl Bounds {
    /// `min..=max` on both axes.
    #[must_use]
    pub fn square(min: i32, max: i32) -> Self {
        Self {
            min_x: Some(min),
            max_x: Some(max),
            min_y: Some(min),
            max_y: Some(max),
        }
    }

    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            min_x: None,
            max_x: None,
            min_y: None,
            max_y: None,
        }
    }

    #[must_use]
    pub fn contains(&self, point: Coord) -> bool {
        self.min_x.is_none_or(|min| point.x >= min)
            && self.max_x.is_none_or(|max| point.x <= max)
            && self.min_y.is_none_or(|min| point.y >= min)
            && self.max_y.is_none_or(|max| point.y <= max)
    }

    /// # Errors
    /// [`ConfigError::InvertedBounds`] if a minimum exceeds its maximum.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, min, max) in [('x', self.min_x, self.max_x), ('y', self.min_y, self.max_y)] {
            if let (Some(min), Some(max)) = (min, max) {
                if min > max {
                    return Err(ConfigError::InvertedBounds { axis, min, max });
                }
            }
        }
        Ok(())
    }
}

/// Tuning for a [`crate::sim::Simulation`].
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub bounds: Bounds,
    /// Discrete ticks per second of wall-clock time while running.
    pub tick_rate: f32,
    /// Upper limit on ticks run by one `advance` call; surplus time carries over.
    pub max_ticks_per_advance: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            tick_rate: 10.0,
            max_ticks_per_advance: 1,
        }
    }
}

impl SimulationConfig {
    /// # Errors
    /// [`ConfigError::Json`] for malformed JSON, otherwise whatever
    /// [`SimulationConfig::validate`] rejects.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// [`ConfigError::TickRate`], [`ConfigError::MaxTicks`] or an inverted
    /// bounds error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate.is_nan() || self.tick_rate <= 0.0 {
            return Err(ConfigError::TickRate(self.tick_rate));
        }
        if self.max_ticks_per_advance == 0 {
            return Err(ConfigError::MaxTicks);
        }
        self.bounds.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_bounds_are_inclusive() {
        let bounds = Bounds::default();
        assert!(bounds.contains(Coord::new(-50, 50)));
        assert!(bounds.contains(Coord::new(50, -50)));
        assert!(!bounds.contains(Coord::new(51, 0)));
        assert!(!bounds.contains(Coord::new(0, -51)));
    }

    #[test]
    fn open_sides_are_unbounded() {
        let bounds = Bounds {
            min_x: Some(0),
            max_x: None,
            min_y: None,
            max_y: Some(0),
        };
        assert!(bounds.contains(Coord::new(i32::MAX, i32::MIN)));
        assert!(!bounds.contains(Coord::new(-1, 0)));
        assert!(!bounds.contains(Coord::new(0, 1)));
    }

    #[test]
    fn config_from_partial_json_uses_defaults() {
        let config = SimulationConfig::from_json(r#"{ "tick_rate": 20.0 }"#).unwrap();
        assert!((config.tick_rate - 20.0).abs() < f32::EPSILON);
        assert_eq!(config.bounds, Bounds::default());
        assert_eq!(config.max_ticks_per_advance, 1);
    }

    #[test]
    fn config_rejects_bad_values() {
        assert!(matches!(
            SimulationConfig::from_json(r#"{ "tick_rate": 0.0 }"#),
            Err(ConfigError::TickRate(_))
        ));
        assert!(matches!(
            SimulationConfig::from_json(r#"{ "max_ticks_per_advance": 0 }"#),
            Err(ConfigError::MaxTicks)
        ));
        let inverted = r#"{ "bounds": { "min_x": 5, "max_x": 1, "min_y": null, "max_y": null } }"#;
        assert!(matches!(
            SimulationConfig::from_json(inverted),
            Err(ConfigError::InvertedBounds { axis: 'x', min: 5, max: 1 })
        ));
        assert!(matches!(
            SimulationConfig::from_json("{"),
            Err(ConfigError::Json(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_unbounded_contains_everything(x in any::<i32>(), y in any::<i32>()) {
            prop_assert!(Bounds::unbounded().contains(Coord::new(x, y)));
        }
    }
}

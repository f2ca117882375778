//! Reproducible specification for a simulation run.
//!
//! A [`Scene`] captures everything needed to recreate an animation:
//! engine name, viewport dimensions, parameters, PRNG seed, step count,
//! and the timed spawn events that stand in for user clicks.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// One recorded spawn request: a projectile aimed at `(x, y)` fired
/// immediately before tick `tick`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SpawnEvent {
    pub tick: usize,
    pub x: f64,
    pub y: f64,
}

/// Reproducible specification for a simulation run.
///
/// Two identical `Scene` values fed to the same engine binary produce
/// bit-identical particle and projectile state at every tick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    pub engine: String,
    pub width: usize,
    pub height: usize,
    pub params: serde_json::Value,
    pub seed: u64,
    pub steps: usize,
    pub spawns: Vec<SpawnEvent>,
}

impl Scene {
    /// Creates a new Scene with default params (`{}`), zero steps, and no
    /// spawn events.
    pub fn new(engine: &str, width: usize, height: usize, seed: u64) -> Self {
        Self {
            engine: engine.to_string(),
            width,
            height,
            params: serde_json::Value::Object(serde_json::Map::new()),
            seed,
            steps: 0,
            spawns: Vec::new(),
        }
    }

    /// Validates dimensions and spawn timing.
    ///
    /// Rejects zero width/height and any spawn event scheduled at or past
    /// `steps` (which could never fire).
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        for event in &self.spawns {
            if event.tick >= self.steps {
                return Err(EngineError::SpawnOutOfRange {
                    tick: event.tick,
                    steps: self.steps,
                });
            }
        }
        Ok(())
    }
}

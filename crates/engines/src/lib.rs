#![deny(unsafe_code)]
//! Engine registry: maps engine names to implementations and provides
//! CPU-side snapshot rendering.
//!
//! This crate sits between `silhouette-core` (which defines the `Engine`
//! trait) and the individual engine crates (`silhouette-heart`, etc.).
//! The CLI depends on this crate to avoid duplicating dispatch logic.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

use glam::DVec2;
use serde_json::Value;
use silhouette_core::error::EngineError;
use silhouette_core::particle::Particle;
use silhouette_core::projectile::Projectile;
use silhouette_core::Engine;

/// All available engine names.
const ENGINE_NAMES: &[&str] = &["heart"];

/// Enumeration of all available silhouette engines.
///
/// Wraps each engine implementation and delegates `Engine` trait methods.
/// Use [`EngineKind::from_name`] for string-based construction (CLI).
pub enum EngineKind {
    /// Heart-silhouette particle field.
    Heart(silhouette_heart::HeartField),
}

impl EngineKind {
    /// Constructs an engine by name.
    ///
    /// Returns `EngineError::UnknownEngine` if the name is not recognized.
    pub fn from_name(
        name: &str,
        width: usize,
        height: usize,
        seed: u64,
        params: &Value,
    ) -> Result<Self, EngineError> {
        match name {
            "heart" => Ok(EngineKind::Heart(silhouette_heart::HeartField::from_json(
                width, height, seed, params,
            )?)),
            _ => Err(EngineError::UnknownEngine(name.to_string())),
        }
    }

    /// Returns a slice of all recognized engine names.
    pub fn list_engines() -> &'static [&'static str] {
        ENGINE_NAMES
    }
}

impl Engine for EngineKind {
    fn step(&mut self) -> Result<(), EngineError> {
        match self {
            EngineKind::Heart(e) => e.step(),
        }
    }

    fn spawn(&mut self, target: DVec2) {
        match self {
            EngineKind::Heart(e) => e.spawn(target),
        }
    }

    fn particles(&self) -> &[Particle] {
        match self {
            EngineKind::Heart(e) => e.particles(),
        }
    }

    fn projectiles(&self) -> &[Projectile] {
        match self {
            EngineKind::Heart(e) => e.projectiles(),
        }
    }

    fn width(&self) -> usize {
        match self {
            EngineKind::Heart(e) => e.width(),
        }
    }

    fn height(&self) -> usize {
        match self {
            EngineKind::Heart(e) => e.height(),
        }
    }

    fn params(&self) -> Value {
        match self {
            EngineKind::Heart(e) => e.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            EngineKind::Heart(e) => e.param_schema(),
        }
    }
}

#![deny(unsafe_code)]
//! Core types for the silhouette particle engine.
//!
//! Provides the `Engine` trait, `ClosedCurve` geometry with its interior
//! sampler, the `Particle` and `Projectile` entity types, color types
//! (`Srgb`, `Hsl`), the `SplitMix64` PRNG, the reproducible `Scene` spec,
//! and parameter helpers.

pub mod color;
pub mod curve;
pub mod engine;
pub mod error;
pub mod params;
pub mod particle;
pub mod prng;
pub mod projectile;
pub mod sampler;
pub mod scene;

pub use color::{Hsl, Srgb};
pub use curve::ClosedCurve;
pub use engine::Engine;
pub use error::EngineError;
pub use particle::Particle;
pub use prng::SplitMix64;
pub use projectile::Projectile;
pub use scene::{Scene, SpawnEvent};

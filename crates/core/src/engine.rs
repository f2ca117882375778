//! The core `Engine` trait that every silhouette engine must implement.
//!
//! The trait is object-safe so engines can be used as `dyn Engine` for
//! runtime switching between silhouettes.

use crate::error::EngineError;
use crate::particle::Particle;
use crate::projectile::Projectile;
use glam::DVec2;
use serde_json::Value;

/// Core trait for silhouette particle engines.
///
/// Each engine owns a fixed particle set seeded inside its silhouette and a
/// varying set of live projectiles, and advances both by one frame per
/// [`step`](Engine::step). The render collaborator consumes the read-only
/// [`particles`](Engine::particles) and [`projectiles`](Engine::projectiles)
/// snapshots between ticks.
///
/// This trait is **object-safe**: you can use `Box<dyn Engine>` or
/// `&dyn Engine` for runtime polymorphism.
pub trait Engine {
    /// Advance the simulation by one tick.
    ///
    /// Projectiles move (and may expire) first, then every particle
    /// integrates repulsion from the still-active projectiles plus its
    /// spring-return force.
    fn step(&mut self) -> Result<(), EngineError>;

    /// Enqueue one projectile aimed at `target`.
    ///
    /// Non-blocking; the projectile joins the simulation on the next tick.
    fn spawn(&mut self, target: DVec2);

    /// Read-only snapshot of the particle set.
    fn particles(&self) -> &[Particle];

    /// Read-only snapshot of the live (active) projectile set.
    fn projectiles(&self) -> &[Projectile];

    /// Viewport width in pixels.
    fn width(&self) -> usize;

    /// Viewport height in pixels.
    fn height(&self) -> usize;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges,
    /// and defaults.
    fn param_schema(&self) -> Value;
}

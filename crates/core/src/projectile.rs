//! Short-lived ballistic entities that repel nearby particles.
//!
//! A projectile launches from a random point just outside one of the four
//! viewport edges, aimed at a target, then flies under constant downward
//! gravity until it drops below the viewport and expires. The `active`
//! flag is monotonic: once false, the projectile never moves or exerts
//! force again, and the owning engine purges it.

use crate::prng::SplitMix64;
use glam::DVec2;

/// Distance outside the viewport at which projectiles are launched, in px.
pub const LAUNCH_MARGIN: f64 = 50.0;

/// How far below the viewport a projectile may fall before expiring, in px.
pub const EXPIRY_MARGIN: f64 = 100.0;

/// A moving repulsion source with a bounded lifetime.
#[derive(Debug, Clone)]
pub struct Projectile {
    /// Current position.
    pub pos: DVec2,
    /// Current velocity.
    pub vel: DVec2,
    /// Repulsion influence radius, constant per instance.
    pub radius: f64,
    active: bool,
}

impl Projectile {
    /// Creates an active projectile with the given kinematic state.
    pub fn new(pos: DVec2, vel: DVec2, radius: f64) -> Self {
        Self {
            pos,
            vel,
            radius,
            active: true,
        }
    }

    /// Launches a projectile from a random viewport edge toward `target`.
    ///
    /// One of the four edges is picked uniformly; the origin sits
    /// [`LAUNCH_MARGIN`] px outside that edge with the in-edge coordinate
    /// uniform over the matching viewport dimension. Speed is uniform in
    /// `[speed_min, speed_max)`, directed straight at the target.
    pub fn launch(
        rng: &mut SplitMix64,
        width: f64,
        height: f64,
        target: DVec2,
        radius: f64,
        speed_min: f64,
        speed_max: f64,
    ) -> Self {
        let pos = match rng.next_usize(4) {
            0 => DVec2::new(rng.next_f64() * width, -LAUNCH_MARGIN),
            1 => DVec2::new(width + LAUNCH_MARGIN, rng.next_f64() * height),
            2 => DVec2::new(rng.next_f64() * width, height + LAUNCH_MARGIN),
            _ => DVec2::new(-LAUNCH_MARGIN, rng.next_f64() * height),
        };

        let offset = target - pos;
        let angle = offset.y.atan2(offset.x);
        let speed = rng.next_range(speed_min, speed_max);

        Self::new(pos, DVec2::new(angle.cos(), angle.sin()) * speed, radius)
    }

    /// Advances one tick: gravity, then translation, then the expiry check.
    ///
    /// Expires permanently at the first tick that leaves the position more
    /// than [`EXPIRY_MARGIN`] px below the viewport. A no-op once inactive.
    pub fn advance(&mut self, gravity: f64, viewport_height: f64) {
        if !self.active {
            return;
        }
        self.vel.y += gravity;
        self.pos += self.vel;
        if self.pos.y > viewport_height + EXPIRY_MARGIN {
            self.active = false;
        }
    }

    /// Whether this projectile still moves and exerts force.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Velocity direction in radians, for arrow-glyph rendering.
    pub fn heading(&self) -> f64 {
        self.vel.y.atan2(self.vel.x)
    }
}

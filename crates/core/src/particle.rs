//! A point mass with a rest position, pushed around by projectiles and
//! pulled home by a spring.
//!
//! `Particle` is a plain struct with pure per-tick update steps; the engine
//! composes them in a fixed order: repulsion, then spring, then damping,
//! then integration. All steps are total, with no failure modes.

use crate::color::Srgb;
use crate::projectile::Projectile;
use glam::DVec2;

/// A particle of the silhouette field.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Equilibrium position, fixed at creation, always inside the silhouette.
    pub rest: DVec2,
    /// Current position.
    pub pos: DVec2,
    /// Current velocity.
    pub vel: DVec2,
    /// Render radius. Cosmetic.
    pub size: f64,
    /// Render color. Cosmetic.
    pub color: Srgb,
    /// Responsiveness to repulsion. Acts as a force multiplier, not a mass
    /// divisor: higher inertia means larger displacement per unit force.
    pub inertia: f64,
}

impl Particle {
    /// Creates a particle at rest at `rest` (current position = rest
    /// position, zero velocity).
    pub fn at_rest(rest: DVec2, size: f64, color: Srgb, inertia: f64) -> Self {
        Self {
            rest,
            pos: rest,
            vel: DVec2::ZERO,
            size,
            color,
            inertia,
        }
    }

    /// Accumulates repulsion from one projectile into the velocity.
    ///
    /// Inside the projectile's radius the force falls off linearly: the
    /// fraction `(radius − d) / radius` is 1 at the center and 0 at the
    /// edge. The offset toward the projectile is subtracted, so the
    /// particle is pushed away. Inactive projectiles exert nothing.
    /// Calls for several projectiles within one tick superpose additively.
    pub fn apply_repulsion(&mut self, projectile: &Projectile, strength: f64) {
        if !projectile.is_active() {
            return;
        }
        let offset = projectile.pos - self.pos;
        let distance = offset.length();
        if distance < projectile.radius {
            let falloff = (projectile.radius - distance) / projectile.radius;
            self.vel -= offset * (falloff * strength * self.inertia);
        }
    }

    /// Accelerates toward the rest position, proportional to displacement.
    pub fn seek_rest(&mut self, spring: f64) {
        self.vel += (self.rest - self.pos) * spring;
    }

    /// Scales the velocity by `factor`, bleeding kinetic energy each tick.
    pub fn damp(&mut self, factor: f64) {
        self.vel *= factor;
    }

    /// Explicit Euler position update over one unit timestep.
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Euclidean distance from the current position to the rest position.
    pub fn distance_to_rest(&self) -> f64 {
        self.pos.distance(self.rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Srgb = Srgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    fn particle_at(pos: DVec2, inertia: f64) -> Particle {
        Particle::at_rest(pos, 1.0, WHITE, inertia)
    }

    fn projectile_at(pos: DVec2, radius: f64) -> Projectile {
        Projectile::new(pos, DVec2::ZERO, radius)
    }

    // ---- Repulsion ----

    #[test]
    fn repulsion_pushes_away_from_projectile() {
        let mut p = particle_at(DVec2::ZERO, 1.0);
        let proj = projectile_at(DVec2::new(40.0, 0.0), 80.0);
        p.apply_repulsion(&proj, 0.1);
        // falloff = (80 − 40) / 80 = 0.5, so Δv = −(40, 0) · 0.5 · 0.1.
        assert!((p.vel.x + 2.0).abs() < 1e-12, "vel.x = {}", p.vel.x);
        assert!(p.vel.y.abs() < 1e-12);
    }

    #[test]
    fn repulsion_is_zero_at_and_beyond_the_radius() {
        let mut p = particle_at(DVec2::ZERO, 1.0);
        p.apply_repulsion(&projectile_at(DVec2::new(80.0, 0.0), 80.0), 0.1);
        assert_eq!(p.vel, DVec2::ZERO);
        p.apply_repulsion(&projectile_at(DVec2::new(200.0, 0.0), 80.0), 0.1);
        assert_eq!(p.vel, DVec2::ZERO);
    }

    #[test]
    fn falloff_fraction_increases_toward_the_center() {
        // The applied fraction (recovered as |Δv| / (d · strength · inertia))
        // must climb from 0 at the edge toward 1 at the center.
        let mut previous = 0.0;
        for d in [79.0, 60.0, 40.0, 20.0, 5.0, 1.0] {
            let mut p = particle_at(DVec2::ZERO, 1.0);
            p.apply_repulsion(&projectile_at(DVec2::new(d, 0.0), 80.0), 0.1);
            let fraction = p.vel.length() / (d * 0.1);
            assert!(
                fraction > previous,
                "fraction {fraction} at d={d} not above {previous}"
            );
            previous = fraction;
        }
        assert!((previous - (80.0 - 1.0) / 80.0).abs() < 1e-9);
    }

    #[test]
    fn coincident_projectile_exerts_no_net_force() {
        // At zero distance the offset vector is zero, so the (maximal)
        // falloff has nothing to act along.
        let mut p = particle_at(DVec2::ZERO, 1.0);
        p.apply_repulsion(&projectile_at(DVec2::ZERO, 80.0), 0.1);
        assert_eq!(p.vel, DVec2::ZERO);
    }

    #[test]
    fn inertia_multiplies_the_response() {
        let mut light = particle_at(DVec2::ZERO, 1.0);
        let mut heavy = particle_at(DVec2::ZERO, 30.0);
        let proj = projectile_at(DVec2::new(40.0, 0.0), 80.0);
        light.apply_repulsion(&proj, 0.1);
        heavy.apply_repulsion(&proj, 0.1);
        assert!(
            (heavy.vel.length() - 30.0 * light.vel.length()).abs() < 1e-9,
            "inertia 30 should scale the kick 30x"
        );
    }

    #[test]
    fn simultaneous_projectiles_superpose_additively() {
        let mut p = particle_at(DVec2::ZERO, 1.0);
        let left = projectile_at(DVec2::new(-40.0, 0.0), 80.0);
        let right = projectile_at(DVec2::new(40.0, 0.0), 80.0);
        p.apply_repulsion(&left, 0.1);
        p.apply_repulsion(&right, 0.1);
        // Symmetric pushes cancel.
        assert!(p.vel.length() < 1e-12, "vel = {:?}", p.vel);

        let mut q = particle_at(DVec2::ZERO, 1.0);
        q.apply_repulsion(&right, 0.1);
        q.apply_repulsion(&right, 0.1);
        let mut single = particle_at(DVec2::ZERO, 1.0);
        single.apply_repulsion(&right, 0.1);
        assert!((q.vel.length() - 2.0 * single.vel.length()).abs() < 1e-12);
    }

    #[test]
    fn inactive_projectile_exerts_nothing() {
        let mut proj = projectile_at(DVec2::new(10.0, 0.0), 80.0);
        // Drive it below the expiry line.
        proj.pos.y = 1000.0;
        proj.advance(0.1, 600.0);
        assert!(!proj.is_active());
        proj.pos = DVec2::new(10.0, 0.0);

        let mut p = particle_at(DVec2::ZERO, 1.0);
        p.apply_repulsion(&proj, 0.1);
        assert_eq!(p.vel, DVec2::ZERO);
    }

    // ---- Spring, damping, integration ----

    #[test]
    fn seek_rest_accelerates_toward_rest() {
        let mut p = particle_at(DVec2::new(100.0, 50.0), 1.0);
        p.pos = DVec2::new(200.0, 50.0);
        p.seek_rest(0.01);
        assert!((p.vel.x + 1.0).abs() < 1e-12, "vel.x = {}", p.vel.x);
        assert_eq!(p.vel.y, 0.0);
    }

    #[test]
    fn seek_rest_at_rest_is_a_no_op() {
        let mut p = particle_at(DVec2::new(3.0, 4.0), 1.0);
        p.seek_rest(0.01);
        assert_eq!(p.vel, DVec2::ZERO);
    }

    #[test]
    fn damp_scales_velocity() {
        let mut p = particle_at(DVec2::ZERO, 1.0);
        p.vel = DVec2::new(10.0, -4.0);
        p.damp(0.95);
        assert!((p.vel.x - 9.5).abs() < 1e-12);
        assert!((p.vel.y + 3.8).abs() < 1e-12);
    }

    #[test]
    fn integrate_moves_by_velocity() {
        let mut p = particle_at(DVec2::new(1.0, 2.0), 1.0);
        p.vel = DVec2::new(0.5, -0.25);
        p.integrate();
        assert_eq!(p.pos, DVec2::new(1.5, 1.75));
    }

    // ---- Convergence of the free particle ----

    #[test]
    fn displaced_particle_relaxes_to_rest() {
        // Spring 0.01 + damping 0.95 is an under-damped contraction: the
        // distance-to-rest oscillates inside a decaying envelope. Sample
        // the envelope per 100-tick window; each window's peak must shrink,
        // and the tail must land within tolerance of rest.
        let mut p = particle_at(DVec2::ZERO, 1.0);
        p.pos = DVec2::new(100.0, 0.0);

        let mut window_peaks = Vec::new();
        for _ in 0..6 {
            let mut peak = 0.0_f64;
            for _ in 0..100 {
                p.seek_rest(0.01);
                p.damp(0.95);
                p.integrate();
                peak = peak.max(p.distance_to_rest());
            }
            window_peaks.push(peak);
        }
        for pair in window_peaks.windows(2) {
            assert!(
                pair[1] < pair[0],
                "envelope grew: {} -> {} in {window_peaks:?}",
                pair[0],
                pair[1]
            );
        }
        assert!(
            p.distance_to_rest() < 1e-3,
            "still {} from rest after 600 ticks",
            p.distance_to_rest()
        );
    }

    // ---- Property-based tests ----

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn repulsion_never_pushes_toward_the_projectile(
                px in -500.0_f64..500.0,
                py in -500.0_f64..500.0,
                inertia in 1.0_f64..31.0,
            ) {
                let proj = projectile_at(DVec2::new(px, py), 80.0);
                let mut p = particle_at(DVec2::ZERO, inertia);
                p.apply_repulsion(&proj, 0.1);
                // Δv is anti-parallel to the offset toward the projectile
                // (or zero), never toward it.
                let toward = DVec2::new(px, py);
                prop_assert!(
                    p.vel.dot(toward) <= 1e-12,
                    "pushed toward projectile: vel {:?}, offset {:?}", p.vel, toward
                );
            }

            #[test]
            fn relaxation_converges_from_any_displacement(
                dx in -2000.0_f64..2000.0,
                dy in -2000.0_f64..2000.0,
            ) {
                let mut p = particle_at(DVec2::new(50.0, 50.0), 1.0);
                p.pos += DVec2::new(dx, dy);
                for _ in 0..1000 {
                    p.seek_rest(0.01);
                    p.damp(0.95);
                    p.integrate();
                }
                prop_assert!(
                    p.distance_to_rest() < 1e-3,
                    "still {} from rest", p.distance_to_rest()
                );
                prop_assert!(p.pos.x.is_finite() && p.pos.y.is_finite());
            }
        }
    }
}

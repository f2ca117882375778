#![deny(unsafe_code)]
//! Heart-silhouette particle engine.
//!
//! Seeds a fixed set of particles inside a heart curve via rejection
//! sampling, then advances them every tick: each particle accumulates
//! radial repulsion from every active projectile, a spring force back
//! toward its rest position, damping, and an explicit Euler position
//! update. Projectiles launch from outside the viewport toward a target
//! on request, fall under constant gravity, and expire once they drop
//! below the viewport.
//!
//! The engine mutates only its own state; drawing is the render
//! collaborator's job, consuming the read-only particle and projectile
//! snapshots.

use glam::DVec2;
use serde_json::{json, Value};
use silhouette_core::color::{hsl_to_srgb, Hsl};
use silhouette_core::curve::ClosedCurve;
use silhouette_core::error::EngineError;
use silhouette_core::params::{param_f64, param_usize};
use silhouette_core::particle::Particle;
use silhouette_core::prng::SplitMix64;
use silhouette_core::projectile::Projectile;
use silhouette_core::sampler::sample_interior;
use silhouette_core::Engine;

/// Default number of particles seeded inside the silhouette.
const DEFAULT_PARTICLE_COUNT: usize = 8000;
/// Default curve scale factor (curve units to pixels).
const DEFAULT_SCALE: f64 = 18.0;
/// Default spring-return strength toward the rest position.
const DEFAULT_SPRING: f64 = 0.01;
/// Default per-tick velocity damping factor.
const DEFAULT_DAMPING: f64 = 0.95;
/// Default repulsion strength (the `k` of the force law).
const DEFAULT_REPULSION: f64 = 0.1;
/// Default downward acceleration applied to projectiles per tick.
const DEFAULT_GRAVITY: f64 = 0.1;
/// Default projectile repulsion radius in px.
const DEFAULT_PROJECTILE_RADIUS: f64 = 80.0;
/// Default projectile launch speed band in px per tick.
const DEFAULT_PROJECTILE_SPEED_MIN: f64 = 20.0;
const DEFAULT_PROJECTILE_SPEED_MAX: f64 = 25.0;
/// Default particle render radius band in px.
const DEFAULT_SIZE_MIN: f64 = 0.5;
const DEFAULT_SIZE_MAX: f64 = 2.0;
/// Default particle hue band in degrees (wraps past 360).
const DEFAULT_HUE_MIN: f64 = 340.0;
const DEFAULT_HUE_MAX: f64 = 365.0;
/// Default particle saturation and lightness.
const DEFAULT_SATURATION: f64 = 1.0;
const DEFAULT_LIGHTNESS: f64 = 0.55;
/// Per-particle inertia band: uniform draw, force multiplier.
const INERTIA_MIN: f64 = 1.0;
const INERTIA_MAX: f64 = 31.0;
/// Rest-position candidate box width, in curve scale units.
const SAMPLING_BOX_FACTOR: f64 = 35.0;
/// The silhouette center sits at `(width / 2, height / CENTER_Y_DIVISOR)`.
const CENTER_Y_DIVISOR: f64 = 2.5;

/// Tunable parameters for the heart-silhouette engine.
///
/// Use [`Default`] for the reference constants (spring 0.01, damping 0.95,
/// repulsion 0.1, gravity 0.1, 8000 particles at scale 18).
#[derive(Debug, Clone, Copy)]
pub struct HeartParams {
    /// Number of particles seeded inside the silhouette.
    pub particle_count: usize,
    /// Curve scale factor (curve units to pixels).
    pub scale: f64,
    /// Spring-return strength toward the rest position.
    pub spring: f64,
    /// Per-tick velocity damping factor.
    pub damping: f64,
    /// Repulsion strength applied inside a projectile's radius.
    pub repulsion: f64,
    /// Downward acceleration applied to projectiles per tick.
    pub gravity: f64,
    /// Projectile repulsion radius in px.
    pub projectile_radius: f64,
    /// Lower bound of the projectile launch speed band.
    pub projectile_speed_min: f64,
    /// Upper bound of the projectile launch speed band.
    pub projectile_speed_max: f64,
    /// Lower bound of the particle render radius band.
    pub size_min: f64,
    /// Upper bound of the particle render radius band.
    pub size_max: f64,
    /// Lower bound of the particle hue band, degrees.
    pub hue_min: f64,
    /// Upper bound of the particle hue band, degrees.
    pub hue_max: f64,
    /// Particle color saturation.
    pub saturation: f64,
    /// Particle color lightness.
    pub lightness: f64,
}

impl Default for HeartParams {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            scale: DEFAULT_SCALE,
            spring: DEFAULT_SPRING,
            damping: DEFAULT_DAMPING,
            repulsion: DEFAULT_REPULSION,
            gravity: DEFAULT_GRAVITY,
            projectile_radius: DEFAULT_PROJECTILE_RADIUS,
            projectile_speed_min: DEFAULT_PROJECTILE_SPEED_MIN,
            projectile_speed_max: DEFAULT_PROJECTILE_SPEED_MAX,
            size_min: DEFAULT_SIZE_MIN,
            size_max: DEFAULT_SIZE_MAX,
            hue_min: DEFAULT_HUE_MIN,
            hue_max: DEFAULT_HUE_MAX,
            saturation: DEFAULT_SATURATION,
            lightness: DEFAULT_LIGHTNESS,
        }
    }
}

impl HeartParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        let d = Self::default();
        Self {
            particle_count: param_usize(params, "particle_count", d.particle_count),
            scale: param_f64(params, "scale", d.scale),
            spring: param_f64(params, "spring", d.spring),
            damping: param_f64(params, "damping", d.damping),
            repulsion: param_f64(params, "repulsion", d.repulsion),
            gravity: param_f64(params, "gravity", d.gravity),
            projectile_radius: param_f64(params, "projectile_radius", d.projectile_radius),
            projectile_speed_min: param_f64(
                params,
                "projectile_speed_min",
                d.projectile_speed_min,
            ),
            projectile_speed_max: param_f64(
                params,
                "projectile_speed_max",
                d.projectile_speed_max,
            ),
            size_min: param_f64(params, "size_min", d.size_min),
            size_max: param_f64(params, "size_max", d.size_max),
            hue_min: param_f64(params, "hue_min", d.hue_min),
            hue_max: param_f64(params, "hue_max", d.hue_max),
            saturation: param_f64(params, "saturation", d.saturation),
            lightness: param_f64(params, "lightness", d.lightness),
        }
    }
}

/// Heart-silhouette particle field.
///
/// Owns the fixed particle set and the live projectile set. Rebuild a new
/// instance (same seed for identical layout) instead of mutating in place
/// when the viewport changes.
pub struct HeartField {
    width: usize,
    height: usize,
    params: HeartParams,
    curve: ClosedCurve,
    rng: SplitMix64,
    particles: Vec<Particle>,
    projectiles: Vec<Projectile>,
}

impl HeartField {
    /// Creates a new engine: builds the heart curve centered at
    /// `(width / 2, height / 2.5)`, rejection-samples `particle_count`
    /// rest positions inside it, and starts with no projectiles.
    ///
    /// Returns `EngineError::InvalidDimensions` if width or height is zero.
    pub fn new(
        width: usize,
        height: usize,
        seed: u64,
        params: HeartParams,
    ) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions);
        }

        let center = silhouette_center(width, height);
        let curve = ClosedCurve::heart(center, params.scale);
        let mut rng = SplitMix64::new(seed);

        let half_extent = params.scale * SAMPLING_BOX_FACTOR / 2.0;
        let rest_positions =
            sample_interior(&curve, center, half_extent, params.particle_count, &mut rng);

        let particles = rest_positions
            .into_iter()
            .map(|rest| {
                let size = rng.next_range(params.size_min, params.size_max);
                let hue = rng.next_range(params.hue_min, params.hue_max);
                let color = hsl_to_srgb(Hsl {
                    h: hue,
                    s: params.saturation,
                    l: params.lightness,
                });
                let inertia = rng.next_range(INERTIA_MIN, INERTIA_MAX);
                Particle::at_rest(rest, size, color, inertia)
            })
            .collect();

        Ok(Self {
            width,
            height,
            params,
            curve,
            rng,
            particles,
            projectiles: Vec::new(),
        })
    }

    /// Creates an engine from a JSON params object, falling back to
    /// defaults for missing keys.
    pub fn from_json(
        width: usize,
        height: usize,
        seed: u64,
        json_params: &Value,
    ) -> Result<Self, EngineError> {
        Self::new(width, height, seed, HeartParams::from_json(json_params))
    }

    /// The silhouette polygon the rest positions were sampled from.
    pub fn silhouette(&self) -> &ClosedCurve {
        &self.curve
    }
}

impl Engine for HeartField {
    fn step(&mut self) -> Result<(), EngineError> {
        let floor = self.height as f64;
        for projectile in &mut self.projectiles {
            projectile.advance(self.params.gravity, floor);
        }
        // Particles must read the already-filtered active set.
        self.projectiles.retain(Projectile::is_active);

        for particle in &mut self.particles {
            for projectile in &self.projectiles {
                particle.apply_repulsion(projectile, self.params.repulsion);
            }
            particle.seek_rest(self.params.spring);
            particle.damp(self.params.damping);
            particle.integrate();
        }
        Ok(())
    }

    fn spawn(&mut self, target: DVec2) {
        self.projectiles.push(Projectile::launch(
            &mut self.rng,
            self.width as f64,
            self.height as f64,
            target,
            self.params.projectile_radius,
            self.params.projectile_speed_min,
            self.params.projectile_speed_max,
        ));
    }

    fn particles(&self) -> &[Particle] {
        &self.particles
    }

    fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn params(&self) -> Value {
        json!({
            "particle_count": self.params.particle_count,
            "scale": self.params.scale,
            "spring": self.params.spring,
            "damping": self.params.damping,
            "repulsion": self.params.repulsion,
            "gravity": self.params.gravity,
            "projectile_radius": self.params.projectile_radius,
            "projectile_speed_min": self.params.projectile_speed_min,
            "projectile_speed_max": self.params.projectile_speed_max,
            "size_min": self.params.size_min,
            "size_max": self.params.size_max,
            "hue_min": self.params.hue_min,
            "hue_max": self.params.hue_max,
            "saturation": self.params.saturation,
            "lightness": self.params.lightness,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "particle_count": {
                "type": "integer",
                "default": DEFAULT_PARTICLE_COUNT,
                "min": 0,
                "max": 100_000,
                "description": "Number of particles seeded inside the silhouette"
            },
            "scale": {
                "type": "number",
                "default": DEFAULT_SCALE,
                "min": 1.0,
                "max": 100.0,
                "description": "Curve scale factor (curve units to pixels)"
            },
            "spring": {
                "type": "number",
                "default": DEFAULT_SPRING,
                "min": 0.0,
                "max": 1.0,
                "description": "Spring-return strength toward the rest position"
            },
            "damping": {
                "type": "number",
                "default": DEFAULT_DAMPING,
                "min": 0.0,
                "max": 1.0,
                "description": "Per-tick velocity damping factor"
            },
            "repulsion": {
                "type": "number",
                "default": DEFAULT_REPULSION,
                "min": 0.0,
                "max": 1.0,
                "description": "Repulsion strength inside a projectile's radius"
            },
            "gravity": {
                "type": "number",
                "default": DEFAULT_GRAVITY,
                "min": 0.0,
                "max": 10.0,
                "description": "Downward acceleration applied to projectiles per tick"
            },
            "projectile_radius": {
                "type": "number",
                "default": DEFAULT_PROJECTILE_RADIUS,
                "min": 1.0,
                "max": 1000.0,
                "description": "Projectile repulsion influence radius in px"
            },
            "projectile_speed_min": {
                "type": "number",
                "default": DEFAULT_PROJECTILE_SPEED_MIN,
                "min": 0.0,
                "max": 100.0,
                "description": "Lower bound of the projectile launch speed band"
            },
            "projectile_speed_max": {
                "type": "number",
                "default": DEFAULT_PROJECTILE_SPEED_MAX,
                "min": 0.0,
                "max": 100.0,
                "description": "Upper bound of the projectile launch speed band"
            },
            "size_min": {
                "type": "number",
                "default": DEFAULT_SIZE_MIN,
                "min": 0.0,
                "max": 10.0,
                "description": "Lower bound of the particle render radius band"
            },
            "size_max": {
                "type": "number",
                "default": DEFAULT_SIZE_MAX,
                "min": 0.0,
                "max": 10.0,
                "description": "Upper bound of the particle render radius band"
            },
            "hue_min": {
                "type": "number",
                "default": DEFAULT_HUE_MIN,
                "min": 0.0,
                "max": 720.0,
                "description": "Lower bound of the particle hue band in degrees"
            },
            "hue_max": {
                "type": "number",
                "default": DEFAULT_HUE_MAX,
                "min": 0.0,
                "max": 720.0,
                "description": "Upper bound of the particle hue band in degrees"
            },
            "saturation": {
                "type": "number",
                "default": DEFAULT_SATURATION,
                "min": 0.0,
                "max": 1.0,
                "description": "Particle color saturation"
            },
            "lightness": {
                "type": "number",
                "default": DEFAULT_LIGHTNESS,
                "min": 0.0,
                "max": 1.0,
                "description": "Particle color lightness"
            }
        })
    }
}

/// Where the silhouette is anchored: horizontally centered, slightly above
/// the vertical middle.
fn silhouette_center(width: usize, height: usize) -> DVec2 {
    DVec2::new(width as f64 / 2.0, height as f64 / CENTER_Y_DIVISOR)
}

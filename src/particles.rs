/// Default batch size for the background layer.
pub const PARTICLE_COUNT: usize = 50;
/// How often the whole batch is regenerated, in milliseconds.
pub const REGEN_INTERVAL_MS: u64 = 3000;

/// One decorative point in the background layer. Batches are replaced
/// wholesale on every regeneration tick; ids never carry over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
    pub opacity: f64,
}

impl Particle {
    /// Duration of the float animation derived from the particle's speed.
    pub fn float_secs(&self) -> f64 {
        self.speed * 10.0
    }
}

/// Generate a fresh batch of `count` particles bounded by the viewport.
/// Sizes land in [1, 4), speeds in [0.1, 0.6), opacities in [0.2, 0.7).
pub fn generate_batch(count: usize, viewport_width: f64, viewport_height: f64) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            id: fastrand::u64(..),
            x: fastrand::f64() * viewport_width,
            y: fastrand::f64() * viewport_height,
            size: fastrand::f64() * 3.0 + 1.0,
            speed: fastrand::f64() * 0.5 + 0.1,
            opacity: fastrand::f64() * 0.5 + 0.2,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn batch_has_configured_count() {
        fastrand::seed(7);
        assert_eq!(generate_batch(PARTICLE_COUNT, 1920.0, 1080.0).len(), 50);
        assert_eq!(generate_batch(3, 1920.0, 1080.0).len(), 3);
        assert!(generate_batch(0, 1920.0, 1080.0).is_empty());
    }

    #[test]
    fn particles_stay_within_bounds() {
        fastrand::seed(11);
        for particle in generate_batch(200, 800.0, 600.0) {
            assert!((0.0..800.0).contains(&particle.x));
            assert!((0.0..600.0).contains(&particle.y));
            assert!((1.0..4.0).contains(&particle.size));
            assert!((0.1..0.6).contains(&particle.speed));
            assert!((0.2..0.7).contains(&particle.opacity));
        }
    }

    #[test]
    fn regeneration_replaces_every_id() {
        fastrand::seed(13);
        let first: HashSet<u64> = generate_batch(PARTICLE_COUNT, 1280.0, 720.0)
            .iter()
            .map(|p| p.id)
            .collect();
        let second: HashSet<u64> = generate_batch(PARTICLE_COUNT, 1280.0, 720.0)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(first.len(), PARTICLE_COUNT);
        assert!(first.is_disjoint(&second));
    }

    #[test]
    fn float_duration_tracks_speed() {
        let particle = Particle {
            id: 1,
            x: 0.0,
            y: 0.0,
            size: 1.0,
            speed: 0.25,
            opacity: 0.5,
        };
        assert!((particle.float_secs() - 2.5).abs() < f64::EPSILON);
    }
}

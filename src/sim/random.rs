//! Uniform random source used by the simulation
//!
//! Geometry and spawning only ever need uniform floats in [0, 1). Any `rand`
//! generator qualifies; tests can script exact sequences instead.

use glam::Vec2;
use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;

/// A generator of uniform floats in [0, 1)
pub trait UniformSource {
    /// Next uniform sample in [0, 1)
    fn unit(&mut self) -> f32;

    /// Uniform sample in [lo, hi)
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.unit() * (hi - lo)
    }

    /// Uniform sample in [-0.5, 0.5) scaled by `width`
    fn centered(&mut self, width: f32) -> f32 {
        (self.unit() - 0.5) * width
    }

    /// Uniformly distributed unit direction
    fn direction(&mut self) -> Vec2 {
        Vec2::from_angle(self.unit() * std::f32::consts::TAU)
    }

    /// Uniform index in [0, len)
    fn index(&mut self, len: usize) -> usize {
        ((self.unit() * len as f32) as usize).min(len.saturating_sub(1))
    }
}

impl<R: RngCore> UniformSource for R {
    fn unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Create the session generator, seeded once from wall-clock time
pub fn session_rng() -> (Pcg32, u64) {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x853c_49e6_748f_ea9b);
    (Pcg32::seed_from_u64(seed), seed)
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::UniformSource;

    /// Replays a fixed list of samples, cycling when exhausted
    pub struct Scripted {
        samples: Vec<f32>,
        cursor: usize,
    }

    impl Scripted {
        pub fn new(samples: &[f32]) -> Self {
            Self {
                samples: samples.to_vec(),
                cursor: 0,
            }
        }
    }

    impl UniformSource for Scripted {
        fn unit(&mut self) -> f32 {
            let v = self.samples[self.cursor % self.samples.len()];
            self.cursor += 1;
            v
        }
    }
}

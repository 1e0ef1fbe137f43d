//! Deterministic value noise and fractal summation
//!
//! The lattice hash is the classic `fract(sin(dot) * k)` shader trick. It is
//! cheap, stateless and reproducible for a fixed seed, which is all terrain
//! classification needs.

use noise::NoiseFn;

use crate::seeds::NoiseSeed;

const HASH_X: f64 = 12.9898;
const HASH_Y: f64 = 78.233;
const HASH_SCALE: f64 = 43758.5453;

/// Largest f64 strictly below 1.0.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Hash two lattice coordinates and a seed to a value in `[0, 1)`.
pub fn hash2d(x: f64, y: f64, seed: NoiseSeed) -> f64 {
    let s = (x * HASH_X + y * HASH_Y + seed.value()).sin() * HASH_SCALE;
    let f = s - s.floor();
    // A tiny negative `s` rounds up to exactly 1.0
    if f >= 1.0 { 0.0 } else { f }
}

/// Cubic ease curve with zero slope at both ends.
pub fn smooth(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Bilinear value noise over the hashed integer lattice.
pub fn value_noise(x: f64, y: f64, seed: NoiseSeed) -> f64 {
    let xi = x.floor();
    let yi = y.floor();
    let u = smooth(x - xi);
    let v = smooth(y - yi);

    let n00 = hash2d(xi, yi, seed);
    let n10 = hash2d(xi + 1.0, yi, seed);
    let n01 = hash2d(xi, yi + 1.0, seed);
    let n11 = hash2d(xi + 1.0, yi + 1.0, seed);

    let nx0 = n00 * (1.0 - u) + n10 * u;
    let nx1 = n01 * (1.0 - u) + n11 * u;
    (nx0 * (1.0 - v) + nx1 * v).min(BELOW_ONE)
}

/// Fractional Brownian Motion over any 2D noise source.
///
/// Frequency doubles and amplitude halves per octave; the sum is normalised by
/// the total amplitude, so a `[0, 1)` source yields a `[0, 1)` result.
pub fn fbm(noise: &impl NoiseFn<f64, 2>, x: f64, y: f64, octaves: u32) -> f64 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut max_value = 0.0;

    for _ in 0..octaves {
        total += amplitude * noise.get([x * frequency, y * frequency]);
        max_value += amplitude;
        amplitude *= 0.5;
        frequency *= 2.0;
    }

    (total / max_value).min(BELOW_ONE)
}

/// Seed-bound value noise source.
#[derive(Clone, Copy, Debug)]
pub struct LatticeNoise {
    seed: NoiseSeed,
}

impl LatticeNoise {
    pub fn new(seed: NoiseSeed) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> NoiseSeed {
        self.seed
    }

    pub fn hash(&self, x: f64, y: f64) -> f64 {
        hash2d(x, y, self.seed)
    }

    pub fn fbm(&self, x: f64, y: f64, octaves: u32) -> f64 {
        fbm(self, x, y, octaves)
    }
}

impl NoiseFn<f64, 2> for LatticeNoise {
    fn get(&self, point: [f64; 2]) -> f64 {
        value_noise(point[0], point[1], self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> NoiseSeed {
        NoiseSeed::new(4242.125).unwrap()
    }

    #[test]
    fn test_hash_is_pure() {
        let s = seed();
        for &(x, y) in &[(0.0, 0.0), (7.0, -3.0), (120.0, 55.0), (-900.0, 12.0)] {
            assert_eq!(hash2d(x, y, s), hash2d(x, y, s));
        }
    }

    #[test]
    fn test_hash_depends_on_seed() {
        let a = NoiseSeed::new(1.0).unwrap();
        let b = NoiseSeed::new(2.0).unwrap();
        let differing = (0..32)
            .filter(|&i| hash2d(i as f64, 3.0, a) != hash2d(i as f64, 3.0, b))
            .count();
        assert!(differing > 28);
    }

    #[test]
    fn test_smooth_endpoints() {
        assert_eq!(smooth(0.0), 0.0);
        assert_eq!(smooth(1.0), 1.0);
        assert_eq!(smooth(0.5), 0.5);
        assert!(smooth(0.25) < 0.25);
        assert!(smooth(0.75) > 0.75);
    }

    #[test]
    fn test_value_noise_matches_hash_on_lattice() {
        let s = seed();
        for ix in -3..3 {
            for iy in -3..3 {
                let (x, y) = (ix as f64, iy as f64);
                assert_eq!(value_noise(x, y, s), hash2d(x, y, s));
            }
        }
    }

    #[test]
    fn test_noise_ranges() {
        let noise = LatticeNoise::new(seed());
        for iy in 0..40 {
            for ix in 0..40 {
                let x = ix as f64 * 0.37 - 5.0;
                let y = iy as f64 * 0.53 - 9.0;

                let h = noise.hash(x.floor(), y.floor());
                assert!((0.0..1.0).contains(&h), "hash {} out of range", h);

                let v = noise.get([x, y]);
                assert!((0.0..1.0).contains(&v), "value noise {} out of range", v);

                for octaves in 1..=6 {
                    let f = noise.fbm(x, y, octaves);
                    assert!((0.0..1.0).contains(&f), "fbm {} out of range", f);
                }
            }
        }
    }

    #[test]
    fn test_single_octave_fbm_is_value_noise() {
        let noise = LatticeNoise::new(seed());
        for i in 0..20 {
            let x = i as f64 * 0.41;
            let y = i as f64 * 0.17 + 2.0;
            assert_eq!(noise.fbm(x, y, 1), noise.get([x, y]));
        }
    }

    #[test]
    fn test_fbm_generic_over_noise_source() {
        struct Constant(f64);
        impl NoiseFn<f64, 2> for Constant {
            fn get(&self, _point: [f64; 2]) -> f64 {
                self.0
            }
        }

        let f = fbm(&Constant(0.25), 3.0, 4.0, 5);
        assert!((f - 0.25).abs() < 1e-12);
    }
}

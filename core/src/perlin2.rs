use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::NoiseGenerator;

// Multi-octave 2D gradient noise
pub struct Perlin2D {
    octaves: usize,
    persistence: f64, // amplitude falloff per octave
    perm: [u8; 512],  // permutation table (256 duplicated)
}

impl Perlin2D {
    pub fn new(seed: u64, octaves: usize, persistence: f64) -> Self {
        let mut p: Vec<u8> = (0..=255).collect();
        p.shuffle(&mut StdRng::seed_from_u64(seed));

        // Duplicated so corner lookups never need a modulo
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = p[i & 255];
        }

        Self {
            octaves: octaves.max(1),
            persistence,
            perm,
        }
    }

    // 6t^5 - 15t^4 + 10t^3
    #[inline]
    fn fade(t: f64) -> f64 {
        t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
    }

    #[inline]
    fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a + t * (b - a)
    }

    // Dot product with one of 8 gradient directions picked by the low bits of `hash`
    #[inline]
    fn grad(hash: u8, x: f64, y: f64) -> f64 {
        let h = hash & 7;
        let (u, v) = if h < 4 { (x, y) } else { (y, x) };
        let u = if h & 1 == 0 { u } else { -u };
        let v = if h & 2 == 0 { v } else { -v };
        u + v
    }

    #[inline]
    fn corner(&self, xi: usize, yi: usize) -> u8 {
        self.perm[self.perm[xi] as usize + yi]
    }

    // Single octave, roughly [-1, 1]
    fn noise(&self, x: f64, y: f64) -> f64 {
        let xi = (x.floor() as i64 & 255) as usize;
        let yi = (y.floor() as i64 & 255) as usize;
        let xf = x - x.floor();
        let yf = y - y.floor();
        let u = Self::fade(xf);
        let v = Self::fade(yf);

        let aa = self.corner(xi, yi);
        let ab = self.corner(xi, yi + 1);
        let ba = self.corner(xi + 1, yi);
        let bb = self.corner(xi + 1, yi + 1);

        let x1 = Self::lerp(Self::grad(aa, xf, yf), Self::grad(ba, xf - 1.0, yf), u);
        let x2 = Self::lerp(
            Self::grad(ab, xf, yf - 1.0),
            Self::grad(bb, xf - 1.0, yf - 1.0),
            u,
        );
        Self::lerp(x1, x2, v)
    }
}

impl NoiseGenerator for Perlin2D {
    // Sum of octaves, each at twice the frequency of the last, normalized to about [-1, 1]
    fn get2(&self, x: f64, y: f64) -> f64 {
        let mut amplitude = 1.0;
        let mut freq = 1.0;
        let mut total = 0.0;
        let mut max_amp = 0.0;

        for _ in 0..self.octaves {
            total += self.noise(x * freq, y * freq) * amplitude;
            max_amp += amplitude;
            amplitude *= self.persistence;
            freq *= 2.0;
        }

        total / max_amp
    }
}

#[cfg(test)]
mod tests {
    use super::Perlin2D;
    use crate::NoiseGenerator;

    #[test]
    fn same_seed_same_field() {
        let a = Perlin2D::new(1234, 4, 0.5);
        let b = Perlin2D::new(1234, 4, 0.5);
        for &(x, y) in &[(10.5, -3.7), (0.25, 0.75), (300.1, 2.2)] {
            assert!((a.get2(x, y) - b.get2(x, y)).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_on_lattice_points() {
        let p = Perlin2D::new(9, 1, 0.5);
        assert_eq!(p.get2(3.0, 7.0), 0.0);
    }

    #[test]
    fn stays_near_unit_range() {
        let p = Perlin2D::new(0, 6, 0.5);
        for i in 0..200 {
            let v = p.get2(i as f64 * 0.37, i as f64 * -0.91);
            assert!((-2.0..=2.0).contains(&v), "{v}");
        }
    }

    #[test]
    fn neighbouring_samples_are_close() {
        let p = Perlin2D::new(5, 1, 0.5);
        let a = p.get2(1.30, 2.40);
        let b = p.get2(1.31, 2.40);
        assert!((a - b).abs() < 0.1);
    }
}

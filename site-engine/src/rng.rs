// rng.rs - Random draws for particle spawning
//
// xorshift32, same generator the rain sim used. Behind a trait so tests can
// script the sequence.

/// Source of uniform draws in [0, 1).
pub trait Entropy {
    fn next_unit(&mut self) -> f64;
}

pub struct XorShift {
    state: u32,
}

impl XorShift {
    pub fn new(seed: u32) -> Self {
        // Zero is a fixed point of xorshift.
        Self { state: if seed == 0 { 0xDEADBEEF } else { seed } }
    }
}

impl Default for XorShift {
    fn default() -> Self {
        Self::new(0xDEADBEEF)
    }
}

impl Entropy for XorShift {
    #[inline(always)]
    fn next_unit(&mut self) -> f64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        (self.state >> 8) as f64 * (1.0 / 16777216.0)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut rng = XorShift::new(7);
        for _ in 0..10_000 {
            let u = rng.next_unit();
            assert!((0.0..1.0).contains(&u), "{u}");
        }
    }

    #[test]
    fn zero_seed_does_not_stall() {
        let mut rng = XorShift::new(0);
        assert_ne!(rng.next_unit(), rng.next_unit());
    }
}

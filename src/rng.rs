//! Xorshift PRNG for spawn selection.

/// 32-bit xorshift generator.
pub struct Rng(u32);

impl Rng {
    /// Seed the generator. Zero is a fixed point of xorshift, so it is
    /// replaced with an arbitrary non-zero constant.
    pub const fn new(seed: u32) -> Self {
        Self(if seed == 0 { 0x6b8b_4567 } else { seed })
    }

    fn next(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }

    /// Uniform-ish value in `0..max`.
    pub fn range(&mut self, max: u32) -> u32 {
        self.next() % max
    }
}

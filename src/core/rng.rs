//! RNG module - 7-bag shape drawing
//!
//! Draws shapes from a shuffled bag of the full shape set, refilled when
//! exhausted, so no shape starves. Backed by a small LCG so games are
//! reproducible from a seed.

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Shuffled-bag shape source
#[derive(Debug, Clone)]
pub struct ShapeBag {
    bag: [ShapeKind; 7],
    next: usize,
    rng: SimpleRng,
}

impl ShapeBag {
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            bag: ShapeKind::ALL,
            next: 0,
            rng: SimpleRng::new(seed),
        };
        bag.refill();
        bag
    }

    fn refill(&mut self) {
        self.bag = ShapeKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.next = 0;
    }

    /// The shape the next draw will return
    pub fn peek(&self) -> ShapeKind {
        self.bag[self.next]
    }

    /// Draw the next shape, refilling the bag when it runs out
    pub fn draw(&mut self) -> ShapeKind {
        let kind = self.bag[self.next];
        self.next += 1;
        if self.next >= self.bag.len() {
            self.refill();
        }
        kind
    }
}

impl Default for ShapeBag {
    fn default() -> Self {
        Self::new(1)
    }
}

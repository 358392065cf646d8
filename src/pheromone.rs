use crate::point::Point;

/// Single scent marker; strength fades by a fixed amount every tick
#[derive(Clone, Debug, PartialEq)]
pub struct Pheromone {
    pub position: Point,
    strength: u8,
    decay_rate: u8,
}

impl Pheromone {
    pub fn new(position: Point, strength: u8, decay_rate: u8) -> Self {
        Self {
            position,
            strength,
            decay_rate,
        }
    }

    #[inline]
    pub fn strength(&self) -> u8 {
        self.strength
    }

    /// Lose one tick's worth of strength, floored at zero
    #[inline]
    pub fn decay(&mut self) {
        self.strength = self.strength.saturating_sub(self.decay_rate);
    }

    /// The only authority on whether the marker should be discarded
    #[inline]
    pub fn is_active(&self) -> bool {
        self.strength > 0
    }

    /// Render color: strength drives the red and green channels
    #[inline]
    pub fn color(&self) -> [u8; 3] {
        [self.strength, self.strength, 0]
    }
}

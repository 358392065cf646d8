use crate::error::{Result, SimError};
use crate::point::Point;

/// Simulation constants. Defaults match the classic 800x600 arena.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Distance covered per tick by directed movement
    pub ant_speed: f64,
    /// Strength of a freshly placed pheromone
    pub pheromone_strength: u8,
    /// Strength lost per tick
    pub pheromone_decay: u8,
    /// A searching ant closer than this to any food picks it up
    pub food_radius: f64,
    /// A returning ant closer than this to its nest delivers
    pub nest_radius: f64,
    /// Per-axis bound of a wander step
    pub wander_step: i32,
    /// Ants placed at the default nest on start
    pub initial_ants: usize,
    pub width: u32,
    pub height: u32,
    /// Keep-out border for the randomly placed starting food
    pub food_margin: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ant_speed: 2.0,
            pheromone_strength: 255,
            pheromone_decay: 1,
            food_radius: 20.0,
            nest_radius: 10.0,
            wander_step: 1,
            initial_ants: 3,
            width: 800,
            height: 600,
            food_margin: 50,
        }
    }
}

impl SimConfig {
    /// Center of the arena, where the default nest sits
    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as f64, (self.height / 2) as f64)
    }

    /// Check that every constant is usable
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("ant speed", self.ant_speed),
            ("food radius", self.food_radius),
            ("nest radius", self.nest_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if self.ant_speed >= self.nest_radius || self.ant_speed >= self.food_radius {
            return Err(SimError::InvalidConfig(format!(
                "ant speed {} must stay below the nest radius {} and the food radius {}",
                self.ant_speed, self.nest_radius, self.food_radius
            )));
        }
        if self.pheromone_strength == 0 {
            return Err(SimError::InvalidConfig(
                "pheromone strength must be at least 1".to_string(),
            ));
        }
        if self.pheromone_decay == 0 {
            return Err(SimError::InvalidConfig(
                "pheromone decay must be at least 1".to_string(),
            ));
        }
        if self.wander_step < 0 {
            return Err(SimError::InvalidConfig(format!(
                "wander step must not be negative, got {}",
                self.wander_step
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(SimError::InvalidConfig(format!(
                "arena must not be empty, got {}x{}",
                self.width, self.height
            )));
        }
        let margin = self.food_margin.saturating_mul(2);
        if margin > self.width || margin > self.height {
            return Err(SimError::InvalidConfig(format!(
                "food margin {} leaves no room in a {}x{} arena",
                self.food_margin, self.width, self.height
            )));
        }
        Ok(())
    }
}

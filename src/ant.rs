use crate::config::SimConfig;
use crate::pheromone::Pheromone;
use crate::point::Point;
use tracing::trace;

/// Foraging state: an ant either looks for food or carries it home
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForagingState {
    Searching,
    Returning,
}

/// A forager bound to the nest it was created for
#[derive(Clone, Debug)]
pub struct Ant {
    pub id: u32,
    pub position: Point,
    state: ForagingState,
    home: Point,
}

impl Ant {
    /// Create a new searching ant at `position` belonging to the nest at `home`
    pub fn new(id: u32, position: Point, home: Point) -> Self {
        Self {
            id,
            position,
            state: ForagingState::Searching,
            home,
        }
    }

    #[inline]
    pub fn state(&self) -> ForagingState {
        self.state
    }

    #[inline]
    pub fn is_carrying_food(&self) -> bool {
        self.state == ForagingState::Returning
    }

    /// Home nest coordinates, fixed at creation
    #[inline]
    pub fn home(&self) -> Point {
        self.home
    }

    /// Advance one tick. Returns true when food was delivered home,
    /// which the caller answers with a new ant at this ant's nest.
    pub fn update(
        &mut self,
        pheromone: Option<&Pheromone>,
        food_sources: &[Point],
        config: &SimConfig,
        rng: &mut fastrand::Rng,
    ) -> bool {
        match self.state {
            ForagingState::Returning => self.update_returning(config),
            ForagingState::Searching => {
                self.update_searching(pheromone, food_sources, config, rng);
                false
            }
        }
    }

    fn update_returning(&mut self, config: &SimConfig) -> bool {
        self.move_towards(self.home, config.ant_speed);
        if self.position.distance(self.home) < config.nest_radius {
            trace!(ant = self.id, nest = %self.home, "delivered food");
            self.state = ForagingState::Searching;
            return true;
        }
        false
    }

    fn update_searching(
        &mut self,
        pheromone: Option<&Pheromone>,
        food_sources: &[Point],
        config: &SimConfig,
        rng: &mut fastrand::Rng,
    ) {
        // picking up food costs the whole tick
        if food_sources
            .iter()
            .any(|&food| self.position.distance(food) < config.food_radius)
        {
            trace!(ant = self.id, at = %self.position, "picked up food");
            self.state = ForagingState::Returning;
            return;
        }

        match pheromone.filter(|p| p.is_active()) {
            Some(scent) => self.move_towards(scent.position, config.ant_speed),
            None => self.wander(config.wander_step, rng),
        }
    }

    /// One straight-line step of `speed` toward `target`; no-op when already there
    fn move_towards(&mut self, target: Point, speed: f64) {
        let dx = target.x - self.position.x;
        let dy = target.y - self.position.y;
        let dist = dx.hypot(dy);
        if dist == 0.0 {
            return;
        }
        self.position = self.position.offset(dx / dist * speed, dy / dist * speed);
    }

    /// Independent per-axis step drawn from -step..=step
    fn wander(&mut self, step: i32, rng: &mut fastrand::Rng) {
        let dx = rng.i32(-step..=step);
        let dy = rng.i32(-step..=step);
        self.position = self.position.offset(dx as f64, dy as f64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scent(x: f64, y: f64) -> Pheromone {
        Pheromone::new(Point::new(x, y), 255, 1)
    }

    #[test]
    fn test_ant_creation() {
        let ant = Ant::new(7, Point::new(1.0, 2.0), Point::new(400.0, 300.0));

        assert_eq!(ant.id, 7);
        assert_eq!(ant.position, Point::new(1.0, 2.0));
        assert_eq!(ant.home(), Point::new(400.0, 300.0));
        assert_eq!(ant.state(), ForagingState::Searching);
        assert!(!ant.is_carrying_food());
    }

    #[test]
    fn test_picks_up_food_without_moving() {
        let config = SimConfig::default();
        let mut rng = fastrand::Rng::with_seed(1);
        let start = Point::new(100.0, 100.0);
        let mut ant = Ant::new(0, start, Point::new(400.0, 300.0));

        let spawned = ant.update(
            Some(&scent(0.0, 0.0)),
            &[Point::new(500.0, 500.0), Point::new(110.0, 110.0)],
            &config,
            &mut rng,
        );

        assert!(!spawned);
        assert_eq!(ant.state(), ForagingState::Returning);
        assert_eq!(ant.position, start);
    }

    #[test]
    fn test_food_radius_is_exclusive() {
        let config = SimConfig::default();
        let mut rng = fastrand::Rng::with_seed(1);
        let mut ant = Ant::new(0, Point::new(0.0, 0.0), Point::new(0.0, 0.0));

        ant.update(
            Some(&scent(0.0, -100.0)),
            &[Point::new(20.0, 0.0)],
            &config,
            &mut rng,
        );

        assert_eq!(ant.state(), ForagingState::Searching);
        assert_eq!(ant.position, Point::new(0.0, -2.0));
    }

    #[test]
    fn test_follows_pheromone() {
        let config = SimConfig::default();
        let mut rng = fastrand::Rng::with_seed(1);
        let mut ant = Ant::new(0, Point::new(0.0, 0.0), Point::new(0.0, 0.0));

        ant.update(Some(&scent(30.0, 40.0)), &[], &config, &mut rng);

        assert!((ant.position.x - 1.2).abs() < 1e-9);
        assert!((ant.position.y - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_ignores_spent_pheromone() {
        let config = SimConfig::default();
        let mut rng = fastrand::Rng::with_seed(5);
        let mut spent = Pheromone::new(Point::new(500.0, 0.0), 1, 1);
        spent.decay();
        let mut ant = Ant::new(0, Point::new(0.0, 0.0), Point::new(0.0, 0.0));

        ant.update(Some(&spent), &[], &config, &mut rng);

        assert!(ant.position.x.abs() <= 1.0);
        assert!(ant.position.y.abs() <= 1.0);
    }

    #[test]
    fn test_standing_on_target_is_noop() {
        let config = SimConfig::default();
        let mut rng = fastrand::Rng::with_seed(1);
        let spot = Point::new(50.0, 50.0);
        let mut ant = Ant::new(0, spot, Point::new(0.0, 0.0));

        ant.update(Some(&scent(50.0, 50.0)), &[], &config, &mut rng);

        assert_eq!(ant.position, spot);
        assert!(ant.position.is_finite());
    }

    #[test]
    fn test_wander_stays_within_one_unit() {
        let config = SimConfig::default();
        let mut rng = fastrand::Rng::with_seed(99);
        let mut ant = Ant::new(0, Point::new(0.0, 0.0), Point::new(0.0, 0.0));

        for _ in 0..500 {
            let before = ant.position;
            ant.update(None, &[], &config, &mut rng);
            let dx = ant.position.x - before.x;
            let dy = ant.position.y - before.y;
            assert!([-1.0, 0.0, 1.0].contains(&dx));
            assert!([-1.0, 0.0, 1.0].contains(&dy));
        }
    }

    #[test]
    fn test_returning_ant_delivers_once() {
        let config = SimConfig::default();
        let mut rng = fastrand::Rng::with_seed(1);
        let home = Point::new(400.0, 300.0);
        let mut ant = Ant::new(0, Point::new(420.0, 300.0), home);
        ant.state = ForagingState::Returning;

        let mut deliveries = 0;
        for _ in 0..20 {
            if ant.update(None, &[], &config, &mut rng) {
                deliveries += 1;
            }
        }

        assert_eq!(deliveries, 1);
        assert_eq!(ant.state(), ForagingState::Searching);
        assert_eq!(ant.home(), home);
    }

    #[test]
    fn test_return_distance_strictly_decreases() {
        let config = SimConfig::default();
        let mut rng = fastrand::Rng::with_seed(1);
        let home = Point::new(0.0, 0.0);
        let mut ant = Ant::new(0, Point::new(90.0, -120.0), home);
        ant.state = ForagingState::Returning;

        let mut last = ant.position.distance(home);
        while !ant.update(None, &[], &config, &mut rng) {
            let now = ant.position.distance(home);
            assert!(now < last);
            last = now;
        }
        assert!(ant.position.distance(home) < config.nest_radius);
    }
}

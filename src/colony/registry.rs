use crate::ant::Ant;
use crate::colony::event::Event;
use crate::colony::snapshot::{AntView, PheromoneView, Snapshot};
use crate::config::SimConfig;
use crate::error::{Result, SimError};
use crate::pheromone::Pheromone;
use crate::point::Point;
use tracing::{debug, info};

/// A food delivery that grew the colony during a tick
#[derive(Clone, Debug, PartialEq)]
pub struct Delivery {
    /// Ant that brought the food home
    pub ant_id: u32,
    /// Ant spawned in response
    pub spawned_id: u32,
    pub nest: Point,
}

/// Outcome of one tick
#[derive(Debug, Default)]
pub struct TickReport {
    pub tick: u64,
    /// The pheromone ran out of strength this tick
    pub pheromone_expired: bool,
    pub deliveries: Vec<Delivery>,
    pub applied: Vec<Event>,
    pub rejected: Vec<SimError>,
}

/// Owns every entity of the simulation and advances it tick by tick
#[derive(Clone, Debug)]
pub struct Colony {
    config: SimConfig,
    nests: Vec<Point>,
    food_sources: Vec<Point>,
    ants: Vec<Ant>,
    pheromone: Option<Pheromone>,
    next_ant_id: u32,
    tick: u64,
    deliveries: u64,
}

impl Colony {
    /// Empty colony: no nests, food, ants or scent
    pub fn empty(config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            nests: Vec::new(),
            food_sources: Vec::new(),
            ants: Vec::new(),
            pheromone: None,
            next_ant_id: 0,
            tick: 0,
            deliveries: 0,
        })
    }

    /// Default start: a centered nest with its initial ants and one
    /// randomly placed food source
    pub fn new(config: SimConfig, rng: &mut fastrand::Rng) -> Result<Self> {
        config.validate()?;
        let nest = config.center();
        let margin = config.food_margin;
        let food = Point::new(
            rng.u32(margin..=config.width - margin) as f64,
            rng.u32(margin..=config.height - margin) as f64,
        );
        let initial = config.initial_ants;

        let mut colony = Self::empty(config)?;
        colony.add_nest(nest);
        colony.add_food(food);
        for _ in 0..initial {
            colony.spawn_ant(nest, nest);
        }
        info!(%nest, %food, ants = initial, "colony founded");
        Ok(colony)
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn nests(&self) -> &[Point] {
        &self.nests
    }

    #[inline]
    pub fn food_sources(&self) -> &[Point] {
        &self.food_sources
    }

    #[inline]
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    #[inline]
    pub fn pheromone(&self) -> Option<&Pheromone> {
        self.pheromone.as_ref()
    }

    #[inline]
    pub fn population(&self) -> usize {
        self.ants.len()
    }

    /// Ants currently carrying food
    pub fn carrying(&self) -> usize {
        self.ants.iter().filter(|a| a.is_carrying_food()).count()
    }

    /// Ticks completed so far
    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Food deliveries since the start
    #[inline]
    pub fn deliveries(&self) -> u64 {
        self.deliveries
    }

    pub fn add_nest(&mut self, at: Point) {
        self.nests.push(at);
    }

    pub fn add_food(&mut self, at: Point) {
        self.food_sources.push(at);
    }

    /// Append a searching ant and return its id
    pub fn spawn_ant(&mut self, at: Point, home: Point) -> u32 {
        let id = self.next_ant_id;
        self.next_ant_id += 1;
        self.ants.push(Ant::new(id, at, home));
        id
    }

    /// Replace any existing pheromone with a fresh one
    pub fn set_pheromone(&mut self, at: Point) {
        self.pheromone = Some(Pheromone::new(
            at,
            self.config.pheromone_strength,
            self.config.pheromone_decay,
        ));
    }

    pub fn clear_pheromone(&mut self) {
        self.pheromone = None;
    }

    /// Apply one external event
    pub fn apply_event(&mut self, event: Event, rng: &mut fastrand::Rng) -> Result<()> {
        if let Some(at) = event.position() {
            if !at.is_finite() {
                return Err(SimError::InvalidEvent(format!(
                    "{} has a non-finite position",
                    event.as_str()
                )));
            }
        }

        match event {
            Event::PlacePheromone(at) => self.set_pheromone(at),
            Event::ClearPheromone => self.clear_pheromone(),
            Event::PlaceNest(at) => self.add_nest(at),
            Event::PlaceFood(at) => self.add_food(at),
            Event::PlaceAnt(at) => {
                if self.nests.is_empty() {
                    return Err(SimError::InvalidEvent(format!(
                        "cannot place ant at {} without a nest",
                        at
                    )));
                }
                let home = self.nests[rng.usize(..self.nests.len())];
                self.spawn_ant(at, home);
            }
        }
        debug!(tick = self.tick, %event, "applied event");
        Ok(())
    }

    /// Advance one tick: age the scent, move every existing ant, grow the
    /// colony for each delivery, then apply the captured events
    pub fn step(&mut self, events: &[Event], rng: &mut fastrand::Rng) -> TickReport {
        self.tick += 1;
        let mut report = TickReport {
            tick: self.tick,
            ..TickReport::default()
        };

        if let Some(pheromone) = self.pheromone.as_mut() {
            pheromone.decay();
            if !pheromone.is_active() {
                debug!(tick = self.tick, at = %pheromone.position, "pheromone expired");
                self.pheromone = None;
                report.pheromone_expired = true;
            }
        }

        let mut homecomings: Vec<(u32, Point)> = Vec::new();
        for ant in self.ants.iter_mut() {
            if ant.update(
                self.pheromone.as_ref(),
                &self.food_sources,
                &self.config,
                rng,
            ) {
                homecomings.push((ant.id, ant.home()));
            }
        }

        for (ant_id, nest) in homecomings {
            let spawned_id = self.spawn_ant(nest, nest);
            self.deliveries += 1;
            debug!(tick = self.tick, ant = ant_id, spawned = spawned_id, %nest, "food delivered");
            report.deliveries.push(Delivery {
                ant_id,
                spawned_id,
                nest,
            });
        }

        for &event in events {
            match self.apply_event(event, rng) {
                Ok(()) => report.applied.push(event),
                Err(err) => report.rejected.push(err),
            }
        }

        report
    }

    /// Read-only render view of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            nests: self.nests.clone(),
            food_sources: self.food_sources.clone(),
            pheromone: self.pheromone.as_ref().map(|p| PheromoneView {
                position: p.position,
                strength: p.strength(),
                color: p.color(),
            }),
            ants: self
                .ants
                .iter()
                .map(|a| AntView {
                    id: a.id,
                    position: a.position,
                    carrying_food: a.is_carrying_food(),
                })
                .collect(),
        }
    }
}

use crate::point::Point;

/// External mutation of the colony, applied at the end of a tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// Replace the active pheromone
    PlacePheromone(Point),
    /// Drop the active pheromone regardless of strength
    ClearPheromone,
    PlaceNest(Point),
    PlaceFood(Point),
    /// New ant at the point, homed to one of the existing nests
    PlaceAnt(Point),
}

impl Event {
    /// Location carried by the event, if any
    pub fn position(&self) -> Option<Point> {
        match *self {
            Event::PlacePheromone(p)
            | Event::PlaceNest(p)
            | Event::PlaceFood(p)
            | Event::PlaceAnt(p) => Some(p),
            Event::ClearPheromone => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Event::PlacePheromone(_) => "place-pheromone",
            Event::ClearPheromone => "clear-pheromone",
            Event::PlaceNest(_) => "place-nest",
            Event::PlaceFood(_) => "place-food",
            Event::PlaceAnt(_) => "place-ant",
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some(p) => write!(f, "{} {}", self.as_str(), p),
            None => f.write_str(self.as_str()),
        }
    }
}

use crate::colony::event::Event;
use crate::error::SimError;
use crate::point::Point;
use std::str::FromStr;
use tracing::debug;

/// Control keys of the interactive front end
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ToggleDebug,
    Nest,
    Food,
    Ant,
    RemovePheromone,
}

impl FromStr for Key {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            b"d" | b"D" => Ok(Key::ToggleDebug),
            b"n" | b"N" => Ok(Key::Nest),
            b"f" | b"F" => Ok(Key::Food),
            b"a" | b"A" => Ok(Key::Ant),
            b"r" | b"R" => Ok(Key::RemovePheromone),
            _ => Err(SimError::InvalidInput(format!("unknown key '{}'", s))),
        }
    }
}

impl Key {
    pub const fn as_char(self) -> char {
        match self {
            Key::ToggleDebug => 'd',
            Key::Nest => 'n',
            Key::Food => 'f',
            Key::Ant => 'a',
            Key::RemovePheromone => 'r',
        }
    }
}

/// What a debug-mode click places
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementMode {
    Nest,
    Food,
    Ant,
}

/// Raw user input before mode interpretation
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawInput {
    Click(Point),
    Key(Key),
}

/// Turns clicks and key presses into colony events.
///
/// Outside debug mode a click drops a pheromone. In debug mode a click
/// places whatever the last n/f/a key selected, or nothing if no
/// placement was selected yet.
#[derive(Clone, Debug, Default)]
pub struct InputController {
    debug_mode: bool,
    placement: Option<PlacementMode>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    #[inline]
    pub fn placement(&self) -> Option<PlacementMode> {
        self.placement
    }

    /// Interpret one input; returns the event it produces, if any
    pub fn handle(&mut self, input: RawInput) -> Option<Event> {
        match input {
            RawInput::Click(at) => self.click(at),
            RawInput::Key(key) => self.press(key),
        }
    }

    fn click(&self, at: Point) -> Option<Event> {
        if !self.debug_mode {
            return Some(Event::PlacePheromone(at));
        }
        match self.placement? {
            PlacementMode::Nest => Some(Event::PlaceNest(at)),
            PlacementMode::Food => Some(Event::PlaceFood(at)),
            PlacementMode::Ant => Some(Event::PlaceAnt(at)),
        }
    }

    fn press(&mut self, key: Key) -> Option<Event> {
        match key {
            Key::ToggleDebug => {
                self.debug_mode = !self.debug_mode;
                debug!(debug_mode = self.debug_mode, "toggled debug mode");
                None
            }
            Key::Nest => self.select(PlacementMode::Nest),
            Key::Food => self.select(PlacementMode::Food),
            Key::Ant => self.select(PlacementMode::Ant),
            Key::RemovePheromone => Some(Event::ClearPheromone),
        }
    }

    fn select(&mut self, mode: PlacementMode) -> Option<Event> {
        self.placement = Some(mode);
        None
    }
}

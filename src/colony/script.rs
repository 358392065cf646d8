use crate::colony::event::Event;
use crate::colony::input::{Key, RawInput};
use crate::error::{Result, SimError};
use crate::point::Point;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Either raw input for the controller or an event for the colony
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScriptAction {
    Input(RawInput),
    Event(Event),
}

/// One scheduled action
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptEntry {
    pub tick: u64,
    pub action: ScriptAction,
}

/// Timeline of scripted actions, ordered by tick then by line
#[derive(Clone, Debug, Default)]
pub struct Script {
    entries: Vec<ScriptEntry>,
}

impl Script {
    pub fn new(mut entries: Vec<ScriptEntry>) -> Self {
        entries.sort_by_key(|e| e.tick);
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Actions scheduled for `tick`, in script order
    pub fn at(&self, tick: u64) -> &[ScriptEntry] {
        let start = self.entries.partition_point(|e| e.tick < tick);
        let end = self.entries.partition_point(|e| e.tick <= tick);
        &self.entries[start..end]
    }

    /// Last tick with a scheduled action
    pub fn last_tick(&self) -> Option<u64> {
        self.entries.last().map(|e| e.tick)
    }
}

/// Parse a script file
pub fn parse_script(path: impl AsRef<Path>) -> Result<Script> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut entries = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(entry) = parse_line(idx + 1, &line)? {
            entries.push(entry);
        }
    }
    Ok(Script::new(entries))
}

/// Parse a script held in memory
pub fn parse_script_from_str(src: &str) -> Result<Script> {
    let mut entries = Vec::new();
    for (idx, line) in src.lines().enumerate() {
        if let Some(entry) = parse_line(idx + 1, line)? {
            entries.push(entry);
        }
    }
    Ok(Script::new(entries))
}

/// `<tick> <command> [args]`; blank lines and `#` comments yield nothing
fn parse_line(line_no: usize, raw: &str) -> Result<Option<ScriptEntry>> {
    let line = match raw.find('#') {
        Some(hash) => &raw[..hash],
        None => raw,
    }
    .trim();
    if line.is_empty() {
        return Ok(None);
    }

    let invalid = |reason: String| SimError::InvalidLine {
        line: line_no,
        reason,
    };

    let mut parts = line.split_whitespace();
    let tick_s = parts
        .next()
        .ok_or_else(|| invalid("missing tick".to_string()))?;
    let tick: u64 = tick_s
        .parse()
        .map_err(|_| invalid(format!("bad tick '{}'", tick_s)))?;
    let command = parts
        .next()
        .ok_or_else(|| invalid("missing command".to_string()))?;
    let args: Vec<&str> = parts.collect();

    let point = |args: &[&str]| -> Result<Point> {
        match args {
            [x, y] => {
                let x: f64 = x
                    .parse()
                    .map_err(|_| invalid(format!("bad x coordinate '{}'", x)))?;
                let y: f64 = y
                    .parse()
                    .map_err(|_| invalid(format!("bad y coordinate '{}'", y)))?;
                Ok(Point::new(x, y))
            }
            _ => Err(invalid(format!("'{}' takes X Y", command))),
        }
    };

    let action = match command {
        "click" => ScriptAction::Input(RawInput::Click(point(args.as_slice())?)),
        "key" => match args.as_slice() {
            [k] => {
                let key: Key = k.parse().map_err(|e: SimError| invalid(e.to_string()))?;
                ScriptAction::Input(RawInput::Key(key))
            }
            _ => return Err(invalid("'key' takes one key".to_string())),
        },
        "pheromone" => ScriptAction::Event(Event::PlacePheromone(point(args.as_slice())?)),
        "nest" => ScriptAction::Event(Event::PlaceNest(point(args.as_slice())?)),
        "food" => ScriptAction::Event(Event::PlaceFood(point(args.as_slice())?)),
        "ant" => ScriptAction::Event(Event::PlaceAnt(point(args.as_slice())?)),
        "clear" => {
            if !args.is_empty() {
                return Err(invalid("'clear' takes no arguments".to_string()));
            }
            ScriptAction::Event(Event::ClearPheromone)
        }
        other => return Err(invalid(format!("unknown command '{}'", other))),
    };

    Ok(Some(ScriptEntry { tick, action }))
}

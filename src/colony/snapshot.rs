use crate::point::Point;
use serde::Serialize;

/// Everything a renderer needs to draw one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub nests: Vec<Point>,
    pub food_sources: Vec<Point>,
    pub pheromone: Option<PheromoneView>,
    pub ants: Vec<AntView>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PheromoneView {
    pub position: Point,
    pub strength: u8,
    pub color: [u8; 3],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AntView {
    pub id: u32,
    pub position: Point,
    pub carrying_food: bool,
}

impl Snapshot {
    /// Serialize as a single JSON line
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

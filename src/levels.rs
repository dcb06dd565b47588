//! Level catalog
//!
//! Read-only level geometry: markers, stars, obstacles and targets. Loaded once
//! per level selection and never mutated during play.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::SimError;

/// A speed-gated collectible
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub id: u32,
    pub position: Vec2,
    pub required_speed: f32,
    pub tolerance: f32,
}

impl Star {
    pub fn new(id: u32, x: f32, y: f32, required_speed: f32, tolerance: f32) -> Self {
        Self {
            id,
            position: Vec2::new(x, y),
            required_speed,
            tolerance: tolerance.max(0.0),
        }
    }

    /// Whether `speed` falls inside the star's tolerance band
    #[inline]
    pub fn speed_matches(&self, speed: f32) -> bool {
        (speed - self.required_speed).abs() <= self.tolerance
    }
}

/// Obstacle variants with their kind-specific properties
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObstacleKind {
    /// A gap the marble must cross at or above `min_clear_speed`
    Gap { min_clear_speed: f32 },
    Wall,
}

/// Axis-aligned obstacle box (`position` is the top-left corner)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub position: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn gap(x: f32, y: f32, w: f32, h: f32, min_clear_speed: f32) -> Self {
        Self {
            kind: ObstacleKind::Gap { min_clear_speed },
            position: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn wall(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            kind: ObstacleKind::Wall,
            position: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Strict AABB overlap with another top-left/size box
    pub fn overlaps(&self, pos: Vec2, size: Vec2) -> bool {
        pos.x < self.position.x + self.size.x
            && pos.x + size.x > self.position.x
            && pos.y < self.position.y + self.size.y
            && pos.y + size.y > self.position.y
    }

    /// Whether a body at `speed` clears this obstacle (walls never clear)
    pub fn cleared_at(&self, speed: f32) -> bool {
        match self.kind {
            ObstacleKind::Gap { min_clear_speed } => speed >= min_clear_speed,
            ObstacleKind::Wall => false,
        }
    }
}

/// Complete geometry for one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelGeometry {
    pub number: u32,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tutorial: bool,
    pub start: Vec2,
    pub finish: Vec2,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
    #[serde(default)]
    pub stars: Vec<Star>,
    #[serde(default)]
    pub required_stars: usize,
    /// Target completion time in seconds
    pub par_time: f32,
}

impl LevelGeometry {
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn star(&self, id: u32) -> Option<&Star> {
        self.stars.iter().find(|s| s.id == id)
    }
}

struct LevelSpec {
    name: &'static str,
    description: &'static str,
    start: (f32, f32),
    finish: (f32, f32),
    obstacles: Vec<Obstacle>,
    stars: Vec<Star>,
    required_stars: usize,
    par_time: f32,
}

/// All built-in levels, ordered by number (1-based)
pub fn catalog() -> Vec<LevelGeometry> {
    let specs = vec![
        LevelSpec {
            name: "First Journey Down",
            description: "Roll your marble from the mountain peak to the ground!",
            start: (100.0, 100.0),
            finish: (700.0, 500.0),
            obstacles: vec![],
            stars: vec![],
            required_stars: 0,
            par_time: 10.0,
        },
        LevelSpec {
            name: "Faster Route Down",
            description: "Collect energy stars on the way down!",
            start: (100.0, 100.0),
            finish: (700.0, 500.0),
            obstacles: vec![],
            stars: vec![
                Star::new(1, 250.0, 200.0, 15.0, 5.0),
                Star::new(2, 450.0, 350.0, 30.0, 5.0),
                Star::new(3, 650.0, 480.0, 45.0, 5.0),
            ],
            required_stars: 3,
            par_time: 8.0,
        },
        LevelSpec {
            name: "Jump Over the Gap",
            description: "Make your marble jump over obstacles!",
            start: (100.0, 100.0),
            finish: (700.0, 500.0),
            obstacles: vec![Obstacle::gap(400.0, 400.0, 150.0, 100.0, 40.0)],
            stars: vec![],
            required_stars: 0,
            par_time: 6.0,
        },
        LevelSpec {
            name: "The Shortcut Path",
            description: "Two gaps! Take the shortcut down the mountain!",
            start: (100.0, 100.0),
            finish: (700.0, 500.0),
            obstacles: vec![
                Obstacle::gap(300.0, 300.0, 100.0, 80.0, 35.0),
                Obstacle::gap(550.0, 450.0, 100.0, 80.0, 35.0),
            ],
            stars: vec![Star::new(1, 400.0, 250.0, 40.0, 5.0)],
            required_stars: 0,
            par_time: 8.0,
        },
        LevelSpec {
            name: "The Mountain Loop",
            description: "A fun loop down the mountain! Need lots of speed!",
            start: (100.0, 100.0),
            finish: (650.0, 500.0),
            obstacles: vec![],
            stars: vec![
                Star::new(1, 400.0, 250.0, 50.0, 5.0),
                Star::new(2, 500.0, 350.0, 45.0, 5.0),
            ],
            required_stars: 1,
            par_time: 7.0,
        },
        LevelSpec {
            name: "Precision Descent",
            description: "Roll at exact speeds through checkpoints!",
            start: (100.0, 100.0),
            finish: (700.0, 500.0),
            obstacles: vec![],
            stars: vec![
                Star::new(1, 200.0, 150.0, 20.0, 3.0),
                Star::new(2, 350.0, 250.0, 35.0, 3.0),
                Star::new(3, 500.0, 350.0, 50.0, 3.0),
                Star::new(4, 650.0, 480.0, 40.0, 3.0),
            ],
            required_stars: 3,
            par_time: 10.0,
        },
        LevelSpec {
            name: "The Efficient Route",
            description: "Find the smartest path down with less space!",
            start: (100.0, 200.0),
            finish: (700.0, 500.0),
            obstacles: vec![Obstacle::wall(300.0, 300.0, 200.0, 20.0)],
            stars: vec![
                Star::new(1, 400.0, 250.0, 30.0, 5.0),
                Star::new(2, 600.0, 450.0, 35.0, 5.0),
            ],
            required_stars: 1,
            par_time: 8.0,
        },
        LevelSpec {
            name: "The Mountain Climb",
            description: "Sometimes you climb up before rolling down!",
            start: (100.0, 400.0),
            finish: (700.0, 100.0),
            obstacles: vec![],
            stars: vec![
                Star::new(1, 300.0, 300.0, 25.0, 5.0),
                Star::new(2, 500.0, 200.0, 20.0, 5.0),
            ],
            required_stars: 1,
            par_time: 12.0,
        },
        LevelSpec {
            name: "Mountain Adventure",
            description: "Your biggest challenge yet!",
            start: (100.0, 100.0),
            finish: (700.0, 500.0),
            obstacles: vec![
                Obstacle::gap(300.0, 250.0, 120.0, 80.0, 40.0),
                Obstacle::wall(500.0, 350.0, 100.0, 20.0),
            ],
            stars: vec![
                Star::new(1, 250.0, 200.0, 35.0, 5.0),
                Star::new(2, 450.0, 300.0, 45.0, 5.0),
                Star::new(3, 650.0, 480.0, 40.0, 5.0),
            ],
            required_stars: 2,
            par_time: 10.0,
        },
        LevelSpec {
            name: "Master of the Mountain",
            description: "The ultimate marble race! Show what you've learned!",
            start: (100.0, 100.0),
            finish: (700.0, 500.0),
            obstacles: vec![
                Obstacle::gap(250.0, 200.0, 100.0, 80.0, 38.0),
                Obstacle::wall(400.0, 300.0, 150.0, 15.0),
                Obstacle::gap(600.0, 450.0, 120.0, 80.0, 42.0),
            ],
            stars: vec![
                Star::new(1, 200.0, 150.0, 35.0, 4.0),
                Star::new(2, 350.0, 250.0, 40.0, 4.0),
                Star::new(3, 500.0, 350.0, 50.0, 4.0),
                Star::new(4, 650.0, 480.0, 45.0, 4.0),
            ],
            required_stars: 3,
            par_time: 15.0,
        },
    ];

    specs
        .into_iter()
        .enumerate()
        .map(|(i, spec)| {
            let number = i as u32 + 1;
            LevelGeometry {
                number,
                name: spec.name.to_string(),
                description: spec.description.to_string(),
                tutorial: number == 1,
                start: Vec2::new(spec.start.0, spec.start.1),
                finish: Vec2::new(spec.finish.0, spec.finish.1),
                obstacles: spec.obstacles,
                stars: spec.stars,
                required_stars: spec.required_stars,
                par_time: spec.par_time,
            }
        })
        .collect()
}

/// Look up a built-in level by number
pub fn level(number: u32) -> Result<LevelGeometry, SimError> {
    catalog()
        .into_iter()
        .find(|l| l.number == number)
        .ok_or(SimError::UnknownLevel(number))
}

//! Event resolution: star capture, finish arrival, obstacle contact
//!
//! Pure predicates over a body state and read-only level geometry. Collection
//! bookkeeping (which stars are already taken) belongs to the driver.

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::distance;
use super::state::{BodyState, GameEvent};
use crate::levels::{LevelGeometry, Obstacle, Star};
use crate::consts::MARBLE_RADIUS;
use crate::settings::{EventSettings, Settings};

/// Stateless resolver holding a fixed event profile
#[derive(Debug, Clone)]
pub struct EventResolver {
    settings: EventSettings,
    body_radius: f32,
}

impl Default for EventResolver {
    fn default() -> Self {
        Self::new(EventSettings::default(), MARBLE_RADIUS)
    }
}

impl EventResolver {
    pub fn new(settings: EventSettings, body_radius: f32) -> Self {
        Self { settings, body_radius }
    }

    /// Resolver for a full profile, sized to its marble
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.events.clone(), settings.physics.body_radius)
    }

    pub fn settings(&self) -> &EventSettings {
        &self.settings
    }

    /// Distance under which the body counts as arrived at the finish
    #[inline]
    pub fn finish_radius(&self) -> f32 {
        self.body_radius * self.settings.finish_radius_factor
    }

    /// True when the body is close enough to the star and inside its speed band
    ///
    /// The star's declared tolerance is the only tolerance; no extra buffer is applied.
    pub fn check_collectible(&self, body: &BodyState, star: &Star) -> bool {
        distance(body.position(), star.position) < self.settings.collect_distance
            && star.speed_matches(body.speed())
    }

    pub fn check_finish(&self, body: &BodyState, finish: Vec2) -> bool {
        distance(body.position(), finish) < self.finish_radius()
    }

    /// AABB overlap between the body's box (top-left at its position) and the obstacle
    pub fn check_obstacle_contact(&self, body: &BodyState, obstacle: &Obstacle) -> bool {
        let size = Vec2::splat(self.body_radius * 2.0);
        obstacle.overlaps(body.position(), size)
    }

    /// Every event that holds for `body` this tick, in level order
    ///
    /// Stars whose id is already in `collected` are skipped. Finish detection never
    /// depends on how many stars were taken.
    pub fn resolve(&self, body: &BodyState, level: &LevelGeometry, collected: &HashSet<u32>) -> Vec<GameEvent> {
        let mut events = Vec::new();

        for star in &level.stars {
            if !collected.contains(&star.id) && self.check_collectible(body, star) {
                events.push(GameEvent::StarCollected { id: star.id });
            }
        }

        for (index, obstacle) in level.obstacles.iter().enumerate() {
            if self.check_obstacle_contact(body, obstacle) {
                events.push(GameEvent::ObstacleContact {
                    index,
                    cleared: obstacle.cleared_at(body.speed()),
                });
            }
        }

        if self.check_finish(body, level.finish) {
            events.push(GameEvent::FinishReached);
        }

        events
    }
}

/// Speed gained from a vertical drop: v = sqrt(2·g·h)
pub fn speed_from_height(gravity: f32, height_drop: f32) -> f32 {
    (2.0 * gravity * height_drop.max(0.0)).sqrt()
}

/// Speed needed to clear a gap of `width`: v = sqrt(g·d)
pub fn required_speed_for_gap(gravity: f32, width: f32) -> f32 {
    (gravity * width.max(0.0)).sqrt()
}

/// Coarse speed classification for meters and marble tinting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpeedBand {
    None,
    Low,
    Medium,
    High,
    Ultra,
}

impl SpeedBand {
    pub fn from_speed(speed: f32) -> Self {
        if speed < 10.0 {
            SpeedBand::None
        } else if speed < 20.0 {
            SpeedBand::Low
        } else if speed < 40.0 {
            SpeedBand::Medium
        } else if speed < 60.0 {
            SpeedBand::High
        } else {
            SpeedBand::Ultra
        }
    }
}

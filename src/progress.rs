//! Player progress and level completion policy
//!
//! Owned entirely by the driver; the simulation core never reads or writes it.

use serde::{Deserialize, Serialize};

use crate::consts::POINTS_PER_STAR;
use crate::levels::LevelGeometry;
use crate::sim::{AttemptSummary, SimError};

/// What it takes to complete a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CompletionPolicy {
    /// Reaching the finish is enough; stars are a bonus
    #[default]
    ReachFinish,
    /// The level's required star count must also be met
    RequireStars,
}

/// Outcome of recording one attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelResult {
    pub passed: bool,
    /// Every star collected within par time
    pub perfect: bool,
    /// Attempt set a new best time for the level
    pub new_best: bool,
}

/// Fastest completion of a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestTime {
    pub level: u32,
    pub time_elapsed: f32,
    pub stars: usize,
}

/// Save data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    pub levels_completed: Vec<u32>,
    pub stars_earned: u64,
    pub total_energy_points: u64,
    pub best_times: Vec<BestTime>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_completed(&self, level: u32) -> bool {
        self.levels_completed.contains(&level)
    }

    /// Level 1 is always open; level n opens once n-1 is completed
    pub fn is_unlocked(&self, level: u32) -> bool {
        level == 1 || (level > 1 && self.is_completed(level - 1))
    }

    pub fn best_time(&self, level: u32) -> Option<&BestTime> {
        self.best_times.iter().find(|b| b.level == level)
    }

    /// Record a finished attempt against `level` under `policy`
    pub fn record(&mut self, summary: &AttemptSummary, level: &LevelGeometry, policy: CompletionPolicy) -> LevelResult {
        let stars = summary.star_count();
        let passed = summary.finished
            && match policy {
                CompletionPolicy::ReachFinish => true,
                CompletionPolicy::RequireStars => stars >= level.required_stars,
            };

        if !passed {
            log::info!(
                "Level {} not passed ({} of {} required stars)",
                level.number,
                stars,
                level.required_stars
            );
            return LevelResult {
                passed: false,
                perfect: false,
                new_best: false,
            };
        }

        if !self.is_completed(level.number) {
            self.levels_completed.push(level.number);
            self.levels_completed.sort_unstable();
        }
        self.stars_earned += stars as u64;
        self.total_energy_points += stars as u64 * POINTS_PER_STAR;

        let new_best = match self.best_times.iter_mut().find(|b| b.level == level.number) {
            Some(best) if summary.time_elapsed < best.time_elapsed => {
                best.time_elapsed = summary.time_elapsed;
                best.stars = stars;
                true
            }
            Some(_) => false,
            None => {
                self.best_times.push(BestTime {
                    level: level.number,
                    time_elapsed: summary.time_elapsed,
                    stars,
                });
                true
            }
        };

        let perfect = stars == level.stars.len() && summary.time_elapsed <= level.par_time;

        log::info!(
            "Level {} complete: {} star(s), {:.2}s (par {:.0}s){}",
            level.number,
            stars,
            summary.time_elapsed,
            level.par_time,
            if perfect { ", perfect" } else { "" }
        );

        LevelResult {
            passed,
            perfect,
            new_best,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string(self)?)
    }
}

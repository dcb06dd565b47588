//! Reference driver for a single playthrough attempt
//!
//! Owns the fixed-timestep loop around the pure core: accepts the player's
//! stroke, steps the integrator, queries the resolver and keeps the collection
//! bookkeeping. Observability lives here, never in the core.

use std::collections::HashSet;

use serde::Serialize;

use super::error::SimError;
use super::events::EventResolver;
use super::integrator::Integrator;
use super::path::Path;
use super::preprocess::{PathPoint, prepare_drawing};
use super::state::{BodyState, GameEvent};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::levels::LevelGeometry;
use crate::settings::Settings;

/// Current phase of an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttemptPhase {
    /// Marble rolling along the path
    Rolling,
    /// Marble reached the finish marker
    Finished,
    /// Marble came to rest before the finish
    Stalled,
}

/// End-of-attempt performance data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttemptSummary {
    pub level: u32,
    /// Star ids in the order they were collected
    pub stars_collected: Vec<u32>,
    pub final_speed: f32,
    pub max_kinetic_energy: f32,
    pub time_elapsed: f32,
    pub par_time: f32,
    /// The attempt ended at the finish marker
    pub finished: bool,
}

impl AttemptSummary {
    pub fn star_count(&self) -> usize {
        self.stars_collected.len()
    }
}

/// One in-progress attempt at a level
#[derive(Debug, Clone)]
pub struct Attempt {
    level: LevelGeometry,
    path: Path,
    body: BodyState,
    integrator: Integrator,
    resolver: EventResolver,
    collected: HashSet<u32>,
    collection_order: Vec<u32>,
    phase: AttemptPhase,
    accumulator: f32,
    time_ticks: u64,
    max_kinetic_energy: f32,
}

impl Attempt {
    /// Accept a finished stroke and place the marble at the start of the path
    pub fn new(level: LevelGeometry, samples: &[PathPoint], settings: &Settings) -> Result<Self, SimError> {
        let points = prepare_drawing(samples, &level, &settings.drawing).inspect_err(|e| {
            log::warn!("Level {}: rejected drawing ({} samples): {}", level.number, samples.len(), e);
        })?;
        let path = Path::from_stroke(&points)?;

        log::info!(
            "Level {} path ready: {} samples -> {} segments, {:.0}px",
            level.number,
            samples.len(),
            path.segment_count(),
            path.total_length()
        );

        let body = BodyState::at_rest(path.start()).launched();

        Ok(Self {
            level,
            path,
            body,
            integrator: Integrator::new(settings.physics.clone()),
            resolver: EventResolver::from_settings(settings),
            collected: HashSet::new(),
            collection_order: Vec::new(),
            phase: AttemptPhase::Rolling,
            accumulator: 0.0,
            time_ticks: 0,
            max_kinetic_energy: 0.0,
        })
    }

    pub fn level(&self) -> &LevelGeometry {
        &self.level
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn body(&self) -> &BodyState {
        &self.body
    }

    pub fn phase(&self) -> AttemptPhase {
        self.phase
    }

    pub fn collected(&self) -> &HashSet<u32> {
        &self.collected
    }

    pub fn time_elapsed(&self) -> f32 {
        self.time_ticks as f32 * SIM_DT
    }

    /// Feed real frame time; runs as many fixed ticks as fit (capped per call)
    pub fn advance(&mut self, frame_dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.phase != AttemptPhase::Rolling {
            return events;
        }

        self.accumulator += frame_dt.max(0.0);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(self.tick());
            self.accumulator -= SIM_DT;
            substeps += 1;

            if self.phase != AttemptPhase::Rolling {
                self.accumulator = 0.0;
                return events;
            }
        }

        if self.accumulator >= SIM_DT {
            log::warn!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        events
    }

    /// Run until the attempt ends or `max_seconds` of simulated time pass
    pub fn simulate(&mut self, max_seconds: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let max_ticks = (max_seconds / SIM_DT).ceil() as u64;
        let mut ticks = 0;
        while self.phase == AttemptPhase::Rolling && ticks < max_ticks {
            events.extend(self.advance(SIM_DT));
            ticks += 1;
        }
        events
    }

    fn tick(&mut self) -> Vec<GameEvent> {
        let previous_speed = self.body.speed();
        self.body = self.integrator.step(&self.body, &self.path, SIM_DT);
        self.time_ticks += 1;
        self.max_kinetic_energy = self.max_kinetic_energy.max(self.body.kinetic_energy());

        let mut events = self.resolver.resolve(&self.body, &self.level, &self.collected);

        for event in &events {
            match *event {
                GameEvent::StarCollected { id } => {
                    if self.collected.insert(id) {
                        self.collection_order.push(id);
                        let required = self.level.star(id).map_or(0.0, |s| s.required_speed);
                        log::debug!(
                            "Star {} collected at speed {:.1}, needed {:.0} (t={:.2}s)",
                            id,
                            self.body.speed(),
                            required,
                            self.time_elapsed()
                        );
                    }
                }
                GameEvent::ObstacleContact { index, cleared } => {
                    log::debug!("Obstacle {} contact (cleared: {})", index, cleared);
                }
                GameEvent::FinishReached => {
                    self.phase = AttemptPhase::Finished;
                    log::info!(
                        "Level {} finished in {:.2}s with {} star(s)",
                        self.level.number,
                        self.time_elapsed(),
                        self.collected.len()
                    );
                }
                GameEvent::Stalled => {}
            }
        }

        let stopped = !self.body.is_moving() && !self.gathering_speed(previous_speed);
        if self.phase == AttemptPhase::Rolling && stopped {
            self.phase = AttemptPhase::Stalled;
            events.push(GameEvent::Stalled);
            log::info!(
                "Level {}: marble stalled at ({:.0}, {:.0}) after {:.2}s",
                self.level.number,
                self.body.position().x,
                self.body.position().y,
                self.time_elapsed()
            );
        }

        events
    }

    /// Still below the stop threshold but faster than last tick, as on a shallow start
    fn gathering_speed(&self, previous_speed: f32) -> bool {
        let speed = self.body.speed();
        speed > previous_speed && speed <= self.integrator.settings().stop_threshold
    }

    pub fn summary(&self) -> AttemptSummary {
        AttemptSummary {
            level: self.level.number,
            stars_collected: self.collection_order.clone(),
            final_speed: self.body.speed(),
            max_kinetic_energy: self.max_kinetic_energy,
            time_elapsed: self.time_elapsed(),
            par_time: self.level.par_time,
            finished: self.phase == AttemptPhase::Finished,
        }
    }
}

//! Marble Roller headless demo
//!
//! Draws a jittered stroke between a level's markers, rolls the marble along it
//! and reports the result.
//!
//! Usage: `marble-roller [LEVEL] [SEED] [--difficulty relaxed|standard|precise]`

mod cli;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use marble_roller::levels::{self, LevelGeometry};
use marble_roller::sim::{Attempt, AttemptPhase, PathPoint, SpeedBand};
use marble_roller::{CompletionPolicy, Progress, Settings};

/// Simulated seconds before giving up on an attempt
const MAX_RUN_SECONDS: f32 = 120.0;
const STROKE_SAMPLES: usize = 80;

/// Freehand-looking stroke from start to finish with a gentle sag and hand jitter
fn jittered_stroke(level: &LevelGeometry, rng: &mut Pcg32) -> Vec<PathPoint> {
    let sag = rng.random_range(0.0..60.0);
    (0..STROKE_SAMPLES)
        .map(|i| {
            let t = i as f32 / (STROKE_SAMPLES - 1) as f32;
            let base = level.start.lerp(level.finish, t);
            let bulge = Vec2::new(0.0, sag * (t * std::f32::consts::PI).sin());
            let jitter = Vec2::new(rng.random_range(-3.0..3.0), rng.random_range(-3.0..3.0));
            PathPoint {
                pos: base + bulge + jitter,
                timestamp: i as f64 * 16.0,
            }
        })
        .collect()
}

fn main() {
    env_logger::init();

    let options = cli::parse_command_line();

    log::info!(
        "Marble Roller (native) starting: level {}, seed {}, {}",
        options.level,
        options.seed,
        options.difficulty.as_str()
    );

    let level = match levels::level(options.level) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let settings = Settings::from_difficulty(options.difficulty);
    let mut rng = Pcg32::seed_from_u64(options.seed);
    let stroke = jittered_stroke(&level, &mut rng);

    let mut attempt = match Attempt::new(level.clone(), &stroke, &settings) {
        Ok(attempt) => attempt,
        Err(e) => {
            eprintln!("Drawing rejected: {}", e);
            std::process::exit(1);
        }
    };

    // Variable frame times, like a real render loop
    let mut frames = 0u32;
    while attempt.phase() == AttemptPhase::Rolling && attempt.time_elapsed() < MAX_RUN_SECONDS {
        let frame_dt = rng.random_range(0.014..0.020);
        for event in attempt.advance(frame_dt) {
            log::debug!("frame {}: {:?}", frames, event);
        }
        frames += 1;
    }

    let summary = attempt.summary();
    println!("Level {}: {}", level.number, level.name);
    println!("  outcome:     {:?}", attempt.phase());
    println!("  time:        {:.2}s (par {:.0}s)", summary.time_elapsed, summary.par_time);
    println!(
        "  final speed: {:.1} ({:?})",
        summary.final_speed,
        SpeedBand::from_speed(summary.final_speed)
    );
    println!("  max KE:      {:.0}", summary.max_kinetic_energy);
    println!("  stars:       {:?} of {}", summary.stars_collected, level.stars.len());

    let mut progress = Progress::new();
    let result = progress.record(&summary, &level, CompletionPolicy::default());
    println!("  passed: {}, perfect: {}", result.passed, result.perfect);

    match progress.to_json() {
        Ok(json) => println!("  progress: {}", json),
        Err(e) => log::warn!("Could not serialize progress: {}", e),
    }
}

//! Drift entry point
//!
//! Headless driver: runs the frame loop on wall-clock time with the demo
//! autopilot at the controls, feeding a renderer-side shape table and
//! building each frame's vertex batch exactly as a graphical front end would.

use std::path::PathBuf;
use std::time::Duration;

use drift::platform::{Autopilot, FrameClock, poll};
use drift::renderer::{FrameBatch, FrameView, ShapeTable};
use drift::sim::{GameEvent, GameState, session_rng, tick};
use drift::tuning::Tuning;

/// Target frame pacing (the display's vsync would normally provide this)
const FRAME_TIME: Duration = Duration::from_millis(16);
/// Demo sessions end after this much simulated time
const DEMO_SECONDS: f32 = 120.0;

/// Running tallies for the end-of-session summary
#[derive(Debug, Default)]
struct SessionStats {
    shots: u32,
    destroyed: u32,
    fragments: usize,
}

impl SessionStats {
    fn record(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::BulletFired => self.shots += 1,
                GameEvent::AsteroidDestroyed { fragments, .. } => {
                    self.destroyed += 1;
                    self.fragments += fragments;
                }
                _ => {}
            }
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Drift (headless) starting...");

    let tuning_path = std::env::var_os(Tuning::ENV_VAR).map(PathBuf::from);
    let tuning = Tuning::load_or_default(tuning_path.as_deref());
    log::info!(
        "Asteroid cap {} (fragments: {}), spawn interval {:.1}s -> {:.1}s",
        tuning.max_asteroids,
        tuning.fragment_cap.as_str(),
        tuning.initial_spawn_interval,
        tuning.min_spawn_interval
    );

    let (mut rng, seed) = session_rng();
    log::info!("Game initialized with seed: {}", seed);

    let mut clock = FrameClock::new(tuning.max_frame_dt);
    let mut state = GameState::new(tuning);
    let mut shapes = ShapeTable::new();
    let mut pilot = Autopilot::new(Some(DEMO_SECONDS));
    let mut stats = SessionStats::default();

    loop {
        let dt = clock.tick();

        pilot.update(&state);
        let input = poll(&pilot);
        if input.quit {
            log::info!("Quit requested after {:.1}s", state.elapsed);
            break;
        }

        tick(&mut state, &input, dt, &mut rng);

        let events = state.drain_events();
        stats.record(&events);
        shapes.apply(&events);

        let view = FrameView::capture(&state);
        let batch = FrameBatch::build(&view, &shapes);
        if state.frames % 300 == 0 {
            log::debug!(
                "t={:.1}s asteroids={} bullets={} shapes={} draw calls={} vertices={} ({} bytes)",
                state.elapsed,
                view.asteroids.len(),
                view.bullets.len(),
                shapes.len(),
                batch.meshes.len(),
                batch.vertex_count(),
                batch.byte_len()
            );
        }

        if state.game_over {
            match serde_json::to_string(&state) {
                Ok(json) => log::debug!("Final state: {}", json),
                Err(e) => log::warn!("Could not serialize final state: {}", e),
            }
            break;
        }

        std::thread::sleep(FRAME_TIME);
    }

    log::info!(
        "Session over: {:.1}s, {} frames, {} shots, {} asteroids destroyed ({} fragments)",
        state.elapsed,
        state.frames,
        stats.shots,
        stats.destroyed,
        stats.fragments
    );
}

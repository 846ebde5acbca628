//! Quantum Flux entry point
//!
//! Native builds run a headless scripted session: start the level, tap once to climb the
//! left side past the obstacle, tap the target two seconds later, and tick at the host
//! frame rate until the run ends. The browser build is driven from JS
//! through `quantum_flux::web::WebGame`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use quantum_flux::consts::FRAME_DT;
    use quantum_flux::persistence::FileStore;
    use quantum_flux::sim::{Arena, Command, GamePhase};
    use quantum_flux::{Game, Tuning};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Quantum Flux (native) starting...");

    let tuning = match std::env::var("QUANTUM_FLUX_TUNING") {
        Ok(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json(&json),
            Err(e) => {
                log::warn!("Could not read tuning file {path}: {e}");
                Tuning::default()
            }
        },
        Err(_) => Tuning::default(),
    };

    let store = FileStore::in_dir(std::env::temp_dir());
    log::info!("Progress file: {}", store.path().display());

    let arena = Arena::new(400.0, 800.0);
    let mut game = Game::new(arena, tuning, store);
    if let Some(best) = game.snapshot().best_time {
        log::info!("Best time so far: {}s", best);
    }

    // (tick, x, y): climb the left side first, then swing toward the target
    let target = game.level().target.pos;
    let script = [(0u32, 50.0, 300.0), (120, target.x, target.y)];

    game.command(Command::StartLevel);
    let mut frame = 0u32;
    while game.phase() == GamePhase::Playing {
        for &(at, x, y) in &script {
            if at == frame {
                game.tap(x, y);
            }
        }
        game.update(FRAME_DT);
        frame += 1;
    }

    let snapshot = game.snapshot();
    match snapshot.result {
        Some(result) => log::info!(
            "Run ended after {} frames: {:?}, {}s used, {}s left{}",
            frame,
            result.outcome,
            result.elapsed_secs,
            result.remaining_secs,
            if result.new_best { " (new best)" } else { "" }
        ),
        None => log::warn!("Run ended without a result"),
    }
    log::info!("Wells placed: {}", snapshot.wells.len());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is quantum_flux::web::wasm_main, this is just to satisfy the compiler
}

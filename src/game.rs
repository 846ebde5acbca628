//! Run lifecycle controller
//!
//! `Game` owns the phase, the current run and the progress record. Hosts feed it taps,
//! menu commands and frame times, and read back an immutable `Snapshot` each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::persistence::{MemoryStore, ProgressStore};
use crate::progress::ProgressRecord;
use crate::sim::{
    Arena, Command, Countdown, GamePhase, Level, Obstacle, PortalPair, RunOutcome, Target,
    TickInput, World, tick,
};
use crate::tuning::Tuning;

/// How the last run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    pub outcome: RunOutcome,
    /// Whole seconds used (`time limit - remaining`)
    pub elapsed_secs: u32,
    pub remaining_secs: u32,
    /// The completion set a new best time
    pub new_best: bool,
}

/// Read-only view of the game for the frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub phase: GamePhase,
    pub arena: Arena,
    pub particle: Vec2,
    pub wells: Vec<Vec2>,
    pub obstacles: Vec<Obstacle>,
    pub target: Target,
    pub portals: Vec<PortalPair>,
    pub remaining_secs: u32,
    pub time_limit_secs: u32,
    pub result: Option<RunResult>,
    pub best_time: Option<u32>,
    pub progress: ProgressRecord,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Game instance holding all state
pub struct Game<S: ProgressStore = MemoryStore> {
    tuning: Tuning,
    level: Level,
    phase: GamePhase,
    world: World,
    timer: Countdown,
    /// Taps captured since the last tick
    pending_taps: Vec<Vec2>,
    last_result: Option<RunResult>,
    progress: ProgressRecord,
    store: S,
}

impl<S: ProgressStore> Game<S> {
    /// Build the game for the shipped level in the Menu phase and load stored progress
    pub fn new(arena: Arena, tuning: Tuning, store: S) -> Self {
        let tuning = tuning.validated();
        let level = Level::standard(arena, &tuning);
        Self::assemble(level, tuning, store)
    }

    /// Build the game for an explicit level definition
    pub fn with_level(level: Level, tuning: Tuning, store: S) -> Self {
        Self::assemble(level, tuning.validated(), store)
    }

    /// Tuning must already be validated
    fn assemble(level: Level, tuning: Tuning, mut store: S) -> Self {
        let progress = match store.load() {
            Ok(progress) => {
                log::info!("Loaded progress for {} levels", progress.levels.len());
                progress
            }
            Err(e) => {
                log::warn!("Failed to load progress ({e}), starting fresh");
                ProgressRecord::new()
            }
        };

        Self {
            tuning,
            world: World::new(&level),
            timer: Countdown::new(level.time_limit_secs),
            level,
            phase: GamePhase::Menu,
            pending_taps: Vec::new(),
            last_result: None,
            progress,
            store,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn timer(&self) -> &Countdown {
        &self.timer
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn progress(&self) -> &ProgressRecord {
        &self.progress
    }

    pub fn last_result(&self) -> Option<RunResult> {
        self.last_result
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Queue a well at screen coordinates for the next tick.
    /// Returns false if the tap was dropped.
    pub fn tap(&mut self, x: f32, y: f32) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        let pos = Vec2::new(x, y);
        if !pos.is_finite() {
            log::warn!("Dropped non-finite tap ({x}, {y})");
            return false;
        }
        self.pending_taps.push(pos);
        true
    }

    /// Apply a menu command. Returns false if it is not valid in the current phase.
    pub fn command(&mut self, command: Command) -> bool {
        if !self.phase.accepts(command) {
            log::warn!("Ignored {:?} in {:?}", command, self.phase);
            return false;
        }

        if command == Command::ResetProgress {
            self.reset_progress();
            return true;
        }

        let Some(next) = self.phase.on_command(command) else {
            return false;
        };
        if next == GamePhase::Playing {
            self.start_run();
        }
        self.set_phase(next);
        true
    }

    /// Run one simulation tick if a run is in progress.
    ///
    /// `dt` is the real time since the previous call (seconds).
    pub fn update(&mut self, dt: f32) -> Option<RunOutcome> {
        if self.phase != GamePhase::Playing {
            return None;
        }

        let input = TickInput {
            taps: std::mem::take(&mut self.pending_taps),
            dt,
        };
        let outcome = tick(&mut self.world, &mut self.timer, &input, &self.tuning)?;
        self.finish_run(outcome);
        Some(outcome)
    }

    /// Immutable view for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            arena: self.world.arena,
            particle: self.world.particle.pos,
            wells: self.world.wells.iter().map(|w| w.pos).collect(),
            obstacles: self.world.obstacles.clone(),
            target: self.world.target,
            portals: self.world.portals.clone(),
            remaining_secs: self.timer.remaining_secs(),
            time_limit_secs: self.timer.limit_secs(),
            result: self.last_result,
            best_time: self.progress.best_time(&self.level.id),
            progress: self.progress.clone(),
        }
    }

    /// Rebuild the run from the level definition
    fn start_run(&mut self) {
        self.world = World::new(&self.level);
        self.timer = Countdown::new(self.level.time_limit_secs);
        self.pending_taps.clear();
        self.last_result = None;
    }

    fn finish_run(&mut self, outcome: RunOutcome) {
        let Some(next) = self.phase.on_outcome(outcome) else {
            return;
        };

        let elapsed_secs = self.timer.elapsed_secs();
        let new_best = outcome.is_success() && self.progress.record(&self.level.id, elapsed_secs);
        self.last_result = Some(RunResult {
            outcome,
            elapsed_secs,
            remaining_secs: self.timer.remaining_secs(),
            new_best,
        });

        if outcome.is_success() {
            log::info!("Level {} complete in {}s", self.level.id, elapsed_secs);
            self.save_progress();
        } else {
            log::info!("Run failed: {:?}", outcome);
        }

        self.set_phase(next);
    }

    fn set_phase(&mut self, next: GamePhase) {
        log::info!("Phase {} -> {}", self.phase.as_str(), next.as_str());
        self.phase = next;
    }

    fn save_progress(&mut self) {
        if let Err(e) = self.store.save(&self.progress) {
            log::error!("Failed to save progress: {e}");
        }
    }

    fn reset_progress(&mut self) {
        self.progress.clear();
        match self.store.reset() {
            Ok(()) => log::info!("Progress cleared"),
            Err(e) => log::error!("Failed to clear stored progress: {e}"),
        }
    }
}

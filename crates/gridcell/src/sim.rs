//! Editing/running state machine and the fixed-rate tick clock.

use crate::cell::{Cell, Coord, Direction, Variant};
use crate::config::SimulationConfig;
use crate::error::SnapshotError;
use crate::snapshot::Snapshot;
use crate::{CellId, Grid};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    /// Time is frozen; the grid can be edited.
    Editing,
    /// The clock drives ticks; edits are refused.
    Running,
}

/// Converts wall-clock seconds into whole ticks. Fractions carry over.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TickClock {
    rate: f32,
    max_per_advance: u32,
    pending: f32,
}

impl TickClock {
    #[must_use]
    pub fn new(rate: f32, max_per_advance: u32) -> Self {
        Self {
            rate,
            max_per_advance,
            pending: 0.0,
        }
    }

    /// Owe exactly one tick, so the next advance runs one immediately.
    pub fn prime(&mut self) {
        self.pending = 1.0;
    }

    pub fn reset(&mut self) {
        self.pending = 0.0;
    }

    #[must_use]
    pub fn pending(&self) -> f32 {
        self.pending
    }

    /// Ticks due now, then bank `dt` for later.
    pub fn advance(&mut self, dt: f32) -> u32 {
        let mut due = 0;
        while self.pending >= 1.0 && due < self.max_per_advance {
            self.pending -= 1.0;
            due += 1;
        }
        self.pending += dt.max(0.0) * self.rate;
        due
    }
}

/// A grid plus the play/pause/step/stop protocol around it.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    mode: Mode,
    clock: TickClock,
    placement_facing: Direction,
    ticks: u64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl Simulation {
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            grid: Grid::new(config.bounds),
            mode: Mode::Editing,
            clock: TickClock::new(config.tick_rate, config.max_ticks_per_advance),
            placement_facing: Direction::Right,
            ticks: 0,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.mode == Mode::Running
    }

    /// Ticks run since construction, including steps.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter().map(|(_, cell)| cell)
    }

    #[must_use]
    pub fn placement_facing(&self) -> Direction {
        self.placement_facing
    }

    pub fn set_placement_facing(&mut self, facing: Direction) {
        self.placement_facing = facing;
    }

    pub fn rotate_placement_cw(&mut self) {
        self.placement_facing = self.placement_facing.rotate_cw();
    }

    pub fn rotate_placement_ccw(&mut self) {
        self.placement_facing = self.placement_facing.rotate_ccw();
    }

    /// Place a cell while editing. Refused while running, on an occupied
    /// spot, or out of bounds.
    pub fn place(&mut self, variant: Variant, point: Coord, facing: Direction) -> Option<CellId> {
        if self.is_running() {
            return None;
        }
        self.grid.place(variant, point, facing)
    }

    /// [`Simulation::place`] using the current placement facing.
    pub fn place_selected(&mut self, variant: Variant, point: Coord) -> Option<CellId> {
        self.place(variant, point, self.placement_facing)
    }

    pub fn remove(&mut self, point: Coord) -> Option<Cell> {
        if self.is_running() {
            return None;
        }
        self.grid.remove(point)
    }

    pub fn clear_all(&mut self) {
        log::info!("clearing {} cells", self.grid.len());
        self.grid.clear_all();
    }

    /// Save the grid and start the clock.
    pub fn play(&mut self) {
        if self.is_running() {
            return;
        }
        self.grid.push_snapshot();
        self.mode = Mode::Running;
        self.clock.prime();
        log::info!("playing simulation");
    }

    /// Freeze the clock, keeping the current state.
    pub fn pause(&mut self) {
        if !self.is_running() {
            return;
        }
        self.mode = Mode::Editing;
        self.clock.reset();
        log::info!("pausing simulation");
    }

    /// Freeze the clock and roll back to the state saved by the last play.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.mode = Mode::Editing;
        self.clock.reset();
        self.grid.pop_snapshot();
        log::info!("stopping simulation");
    }

    /// Run exactly one tick while paused.
    pub fn step(&mut self) {
        if self.is_running() {
            return;
        }
        log::info!("stepping simulation");
        self.run_tick();
    }

    /// Feed `dt` seconds of wall-clock time. Returns the ticks run.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !self.is_running() {
            return 0;
        }
        let due = self.clock.advance(dt);
        for _ in 0..due {
            self.run_tick();
        }
        due
    }

    /// Serialize the live grid.
    ///
    /// # Errors
    /// [`SnapshotError::Json`] if serialization fails.
    pub fn save(&self) -> Result<String, SnapshotError> {
        self.grid.save_snapshot().to_json()
    }

    /// Replace the grid from JSON while editing. A rejected file leaves the
    /// grid untouched. Returns `Ok(false)` while running.
    ///
    /// # Errors
    /// [`SnapshotError::Json`] for a malformed file and
    /// [`SnapshotError::OutOfBounds`] for a record this grid could not hold.
    pub fn load(&mut self, json: &str) -> Result<bool, SnapshotError> {
        if self.is_running() {
            return Ok(false);
        }
        let snapshot = Snapshot::from_json(json)?;
        snapshot.check_bounds(&self.grid.bounds())?;
        self.grid.load_snapshot(&snapshot);
        log::info!("loaded {} cells", snapshot.len());
        Ok(true)
    }

    fn run_tick(&mut self) {
        self.grid.tick();
        self.ticks += 1;
    }
}

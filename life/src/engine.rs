// engine.rs - Generation transitions, statistics, and playback

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, info};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::error::{LifeError, LifeResult};
use crate::grid::Grid;

/// Fastest allowed playback cadence.
pub const MIN_INTERVAL: Duration = Duration::from_millis(100);
/// Slowest allowed playback cadence.
pub const MAX_INTERVAL: Duration = Duration::from_millis(2000);
/// Amount [`Engine::faster`] and [`Engine::slower`] move the interval by.
pub const SPEED_STEP: Duration = Duration::from_millis(100);
/// Interval a fresh engine starts with.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

fn clamp_interval(interval: Duration) -> Duration {
    interval.clamp(MIN_INTERVAL, MAX_INTERVAL)
}

/// Board plus everything derived from it. Lives behind the playback lock so
/// the ticker task and manual calls serialize.
struct World {
    grid: Grid,
    /// Live-neighbor count per cell, row-major, recomputed after every
    /// mutation of the grid. Values are 0..=8.
    life_map: Vec<u8>,
    iterations: u64,
    cells_created: u64,
    cells_destroyed: u64,
}

impl World {
    fn new(rows: usize, cols: usize) -> LifeResult<Self> {
        let grid = Grid::new(rows, cols)?;
        // an empty board has an all-zero neighbor map, no remap needed
        Ok(Self {
            life_map: vec![0; rows * cols],
            grid,
            iterations: 0,
            cells_created: 0,
            cells_destroyed: 0,
        })
    }

    /// Recomputes the neighbor-count map from the current grid.
    fn remap(&mut self) {
        let (rows, cols) = self.grid.dimensions();
        for row in 0..rows {
            for col in 0..cols {
                self.life_map[row * cols + col] = self.grid.live_neighbors(row, col);
            }
        }
    }

    /// Advances the board one generation. The apply pass reads only the
    /// cached neighbor map, which holds counts for the pre-transition board,
    /// so partially-updated cells never leak into the rule.
    fn step(&mut self) {
        let (rows, cols) = self.grid.dimensions();
        let mut created: u64 = 0;
        let mut destroyed: u64 = 0;
        for row in 0..rows {
            for col in 0..cols {
                let alive = self.grid.is_alive(row, col);
                let count = self.life_map[row * cols + col];
                match (alive, count) {
                    (true, 2) | (true, 3) => {} // Survival
                    (true, _) => {
                        // Under- or over-population
                        self.grid.set(row, col, false);
                        destroyed += 1;
                    }
                    (false, 3) => {
                        // Birth
                        self.grid.set(row, col, true);
                        created += 1;
                    }
                    (false, _) => {} // Stays dead
                }
            }
        }
        // one generation evaluated, whether or not anything changed
        self.iterations += 1;
        self.cells_created += created;
        self.cells_destroyed += destroyed;
        self.remap();
        debug!(
            "generation {}: {} cells born, {} cells died, {} alive",
            self.iterations,
            created,
            destroyed,
            self.grid.live_count()
        );
    }

    fn toggle(&mut self, row: usize, col: usize) -> LifeResult<()> {
        self.grid.toggle(row, col)?;
        self.remap();
        Ok(())
    }
}

/// Game of Life simulation session: a board, its running statistics, and a
/// cancellable timed-advance policy.
///
/// All methods are synchronous; the engine owns a small tokio runtime that
/// drives the playback ticker, and a mutex serializes the ticker against
/// manual [`step`](Engine::step)/[`toggle_cell`](Engine::toggle_cell) calls.
/// Engines are independent values; statistics reset only by constructing a
/// new engine.
pub struct Engine {
    world: Arc<Mutex<World>>,
    runtime: tokio::runtime::Runtime,
    ticker: Option<JoinHandle<()>>,
    interval: Duration,
}

impl Engine {
    /// Creates an engine with an all-dead `rows` x `cols` board, zeroed
    /// statistics, and playback stopped.
    pub fn new(rows: usize, cols: usize) -> LifeResult<Self> {
        let world = World::new(rows, cols)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("life-playback")
            .enable_time()
            .build()
            .map_err(LifeError::Runtime)?;
        Ok(Self {
            world: Arc::new(Mutex::new(world)),
            runtime,
            ticker: None,
            interval: DEFAULT_INTERVAL,
        })
    }

    fn world(&self) -> MutexGuard<'_, World> {
        // World mutations cannot panic, so a poisoned lock still holds a
        // consistent world.
        self.world.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Advances the board one generation and updates the statistics. Valid
    /// whether or not playback is running.
    pub fn step(&self) {
        self.world().step();
    }

    /// Flips one cell directly, bypassing the transition rule. Leaves the
    /// iteration and created/destroyed counters untouched.
    pub fn toggle_cell(&self, row: usize, col: usize) -> LifeResult<()> {
        self.world().toggle(row, col)
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.world().grid.is_alive(row, col)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.world().grid.dimensions()
    }

    /// Generations evaluated so far.
    pub fn iterations(&self) -> u64 {
        self.world().iterations
    }

    /// Cells brought to life by the transition rule, cumulative.
    pub fn cells_created(&self) -> u64 {
        self.world().cells_created
    }

    /// Cells killed by the transition rule, cumulative.
    pub fn cells_destroyed(&self) -> u64 {
        self.world().cells_destroyed
    }

    /// Live cells currently on the board.
    pub fn live_cells(&self) -> usize {
        self.world().grid.live_count()
    }

    /// Visits every cell in row-major order. The board is locked for the
    /// whole pass, so the visitor sees one consistent generation.
    pub fn for_each_cell(&self, visitor: impl FnMut(usize, usize, bool)) {
        self.world().grid.for_each_cell(visitor);
    }

    /// Current step interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Starts automatic stepping at `interval` (clamped to
    /// [`MIN_INTERVAL`]..=[`MAX_INTERVAL`]). No-op when already running;
    /// use [`set_speed`](Engine::set_speed) to retune a running engine.
    pub fn play(&mut self, interval: Duration) {
        if self.is_running() {
            return;
        }
        self.interval = clamp_interval(interval);
        self.spawn_ticker();
        info!("playback started, stepping every {:?}", self.interval);
    }

    /// Stops automatic stepping. Once this returns no further automatic
    /// step fires: the ticker is aborted and joined, and an in-flight step
    /// is waited out. No-op when already stopped.
    pub fn pause(&mut self) {
        let Some(ticker) = self.ticker.take() else {
            return;
        };
        ticker.abort();
        let _ = self.runtime.block_on(ticker);
        info!("playback paused");
    }

    /// Changes the step interval, clamped to
    /// [`MIN_INTERVAL`]..=[`MAX_INTERVAL`]. If playback is running the
    /// ticker restarts at the new cadence; board and statistics are
    /// untouched.
    pub fn set_speed(&mut self, interval: Duration) {
        self.interval = clamp_interval(interval);
        debug!("step interval set to {:?}", self.interval);
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
            let _ = self.runtime.block_on(ticker);
            self.spawn_ticker();
        }
    }

    /// Speeds playback up one notch: shrinks the interval by
    /// [`SPEED_STEP`], saturating at [`MIN_INTERVAL`].
    pub fn faster(&mut self) {
        self.set_speed(self.interval.saturating_sub(SPEED_STEP));
    }

    /// Slows playback down one notch: grows the interval by
    /// [`SPEED_STEP`], saturating at [`MAX_INTERVAL`].
    pub fn slower(&mut self) {
        self.set_speed(self.interval + SPEED_STEP);
    }

    fn spawn_ticker(&mut self) {
        let world = Arc::clone(&self.world);
        let period = self.interval;
        self.ticker = Some(self.runtime.spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // the first tick completes immediately; the first step belongs
            // one full period after play
            ticker.tick().await;
            loop {
                ticker.tick().await;
                world.lock().unwrap_or_else(PoisonError::into_inner).step();
            }
        }));
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.pause();
    }
}

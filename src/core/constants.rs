// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 50;
pub const TIMER_STEP_MS: u64 = 1000;
/// Largest frame delta fed to the timer; longer stalls are clamped.
pub const MAX_TICK_DT_MS: u64 = 2000;

// Grid geometry
pub const MIN_GRID_DIMENSION: usize = 5;
pub const ENTRANCE_ROW: usize = 1;
pub const ENTRANCE_COL: usize = 1;
/// Stride between carving lattice nodes.
pub const LATTICE_STRIDE: usize = 2;

// Exit placement
/// Exit sampling gives up after `EXIT_RETRY_FACTOR * rows * columns` draws.
pub const EXIT_RETRY_FACTOR: usize = 4;

// Event log
pub const EVENT_LOG_CAPACITY: usize = 8;

//! Application-level configuration constants.

use log::Level;

// Timing
/// Period of the display tick while running; hundredths-of-a-second resolution.
pub const TICK_INTERVAL_MS: u32 = 10;

// Logging
pub const LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::Debug
} else {
    Level::Info
};

// UI text
pub const TITLE: &str = "Stopwatch Pro";
pub const SUBTITLE: &str = "Precision timing with elegant design";
pub const SHORTCUT_HINT: &str = "Space (Start/Pause) • L (Lap) • Ctrl+R (Reset)";

use log::{debug, info};
use serde::Serialize;
use std::collections::VecDeque;

pub mod clock;
pub mod config;
pub mod hooks;
pub mod input;
pub mod js_api;
pub mod ticker;

/// Milliseconds, both for wall-clock instants and for elapsed durations.
pub type Millis = u64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// A snapshot of the elapsed time taken while the stopwatch was running.
///
/// Field names are camelCase on the wire so JavaScript hosts receive
/// `{ id, lapNumber, capturedElapsed }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LapRecord {
    /// Creation timestamp in ms, unique within the lap list.
    pub id: u64,
    /// 1-based position in the current recording session.
    pub lap_number: u32,
    pub captured_elapsed: Millis,
}

/// Clock engine and lap recorder for a single stopwatch.
///
/// Every time-dependent operation receives the current wall-clock instant,
/// so the engine itself never reads a clock. Elapsed time is derived from
/// `now - reference`, where `reference` is chosen on start so that a resume
/// continues from the frozen value instead of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwatch {
    state: RunState,
    elapsed_ms: Millis,
    // Signed: `now - elapsed` may precede the epoch of a synthetic clock.
    reference_ms: i64,
    laps: VecDeque<LapRecord>,
    lap_counter: u32,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Elapsed time as of the last start, tick, lap or pause.
    pub fn elapsed_ms(&self) -> Millis {
        self.elapsed_ms
    }

    /// Recorded laps, newest first.
    pub fn laps(&self) -> &VecDeque<LapRecord> {
        &self.laps
    }

    /// Number the next lap would receive minus one.
    pub fn lap_counter(&self) -> u32 {
        self.lap_counter
    }

    /// Moves to `Running`, anchoring the reference instant so that elapsed
    /// time keeps growing from its current value. Returns `false` if the
    /// stopwatch was already running.
    pub fn start(&mut self, now: Millis) -> bool {
        if self.is_running() {
            return false;
        }
        self.reference_ms = now as i64 - self.elapsed_ms as i64;
        self.state = RunState::Running;
        debug!("Stopwatch started at elapsed {} ms", self.elapsed_ms);
        true
    }

    /// Takes a final sample at `now` and freezes elapsed time. Returns `false`
    /// if the stopwatch was not running.
    pub fn pause(&mut self, now: Millis) -> bool {
        if !self.is_running() {
            return false;
        }
        self.sample(now);
        self.state = RunState::Stopped;
        debug!("Stopwatch paused at elapsed {} ms", self.elapsed_ms);
        true
    }

    pub fn toggle(&mut self, now: Millis) {
        if self.is_running() {
            self.pause(now);
        } else {
            self.start(now);
        }
    }

    /// Stops, zeroes elapsed time and drops every lap.
    pub fn reset(&mut self) {
        self.state = RunState::Stopped;
        self.elapsed_ms = 0;
        self.reference_ms = 0;
        self.clear_laps();
        info!("Stopwatch reset");
    }

    /// Recomputes elapsed time from the wall clock. Ignored while stopped.
    pub fn tick(&mut self, now: Millis) -> Millis {
        if self.is_running() {
            self.sample(now);
        }
        self.elapsed_ms
    }

    /// Records a lap at the front of the list. Ignored while stopped.
    pub fn record_lap(&mut self, now: Millis) -> Option<&LapRecord> {
        if !self.is_running() {
            debug!("Lap ignored while stopped");
            return None;
        }
        self.sample(now);
        self.lap_counter += 1;

        let id = self.laps.front().map_or(now, |newest| now.max(newest.id + 1));
        let lap = LapRecord {
            id,
            lap_number: self.lap_counter,
            captured_elapsed: self.elapsed_ms,
        };
        debug!(
            "Lap {} recorded at {}",
            lap.lap_number,
            format_time(lap.captured_elapsed)
        );
        self.laps.push_front(lap);
        self.laps.front()
    }

    /// Empties the lap list and restarts numbering at 1. Elapsed time and run
    /// state are left alone.
    pub fn clear_laps(&mut self) {
        self.laps.clear();
        self.lap_counter = 0;
    }

    fn sample(&mut self, now: Millis) {
        let delta = (now as i64 - self.reference_ms).max(0) as Millis;
        // A wall clock stepping backwards must not rewind the display.
        self.elapsed_ms = self.elapsed_ms.max(delta);
    }
}

/// Format milliseconds as "MM:SS.CC". Minutes are not wrapped at 60.
pub fn format_time(ms: Millis) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    let hundredths = (ms % 1000) / 10;
    format!("{:02}:{:02}.{:02}", minutes, seconds, hundredths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let sw = Stopwatch::new();
        assert_eq!(sw.state(), RunState::Stopped);
        assert_eq!(sw.elapsed_ms(), 0);
        assert!(sw.laps().is_empty());
        assert_eq!(sw.lap_counter(), 0);
    }

    #[test]
    fn test_elapsed_follows_wall_clock_deltas() {
        let mut sw = Stopwatch::new();
        sw.start(10_000);
        // Irregular tick spacing still yields exact deltas.
        assert_eq!(sw.tick(10_013), 13);
        assert_eq!(sw.tick(10_047), 47);
        assert_eq!(sw.tick(11_500), 1500);
    }

    #[test]
    fn test_pause_resume_preserves_accumulated_time() {
        let mut sw = Stopwatch::new();
        sw.start(1000);
        sw.tick(2000);
        assert!(sw.pause(2500));
        assert_eq!(sw.elapsed_ms(), 1500);

        // Frozen while stopped, no matter how much wall time passes.
        assert_eq!(sw.tick(9000), 1500);
        assert_eq!(sw.elapsed_ms(), 1500);

        assert!(sw.start(20_000));
        assert_eq!(sw.tick(20_000), 1500);
        assert_eq!(sw.tick(20_250), 1750);
    }

    #[test]
    fn test_start_then_pause_without_progress() {
        let mut sw = Stopwatch::new();
        sw.start(0);
        sw.pause(700);
        assert_eq!(sw.elapsed_ms(), 700);

        sw.start(5000);
        sw.pause(5000);
        assert_eq!(sw.elapsed_ms(), 700);
        assert_eq!(sw.state(), RunState::Stopped);
    }

    #[test]
    fn test_start_and_pause_are_idempotent() {
        let mut sw = Stopwatch::new();
        assert!(!sw.pause(100));
        assert!(sw.start(100));
        assert!(!sw.start(400));
        // The second start must not move the reference instant.
        assert_eq!(sw.tick(600), 500);
        assert!(sw.pause(600));
        assert!(!sw.pause(900));
        assert_eq!(sw.elapsed_ms(), 500);
    }

    #[test]
    fn test_toggle_flips_run_state() {
        let mut sw = Stopwatch::new();
        sw.toggle(0);
        assert!(sw.is_running());
        sw.toggle(250);
        assert!(!sw.is_running());
        assert_eq!(sw.elapsed_ms(), 250);
        sw.toggle(1000);
        assert!(sw.is_running());
        assert_eq!(sw.tick(1100), 350);
    }

    #[test]
    fn test_elapsed_never_decreases_when_clock_steps_back() {
        let mut sw = Stopwatch::new();
        sw.start(5000);
        assert_eq!(sw.tick(6000), 1000);
        assert_eq!(sw.tick(5500), 1000);
        assert_eq!(sw.tick(6100), 1100);
    }

    #[test]
    fn test_record_lap_while_stopped_is_ignored() {
        let mut sw = Stopwatch::new();
        assert!(sw.record_lap(100).is_none());
        assert!(sw.laps().is_empty());
        assert_eq!(sw.lap_counter(), 0);

        sw.start(0);
        sw.pause(300);
        assert!(sw.record_lap(400).is_none());
        assert!(sw.laps().is_empty());
        assert_eq!(sw.lap_counter(), 0);
    }

    #[test]
    fn test_lap_numbers_increase_across_pauses() {
        let mut sw = Stopwatch::new();
        sw.start(0);
        sw.record_lap(100);
        sw.record_lap(250);
        sw.pause(300);
        sw.start(1000);
        sw.record_lap(1100);

        let numbers: Vec<u32> = sw.laps().iter().map(|lap| lap.lap_number).collect();
        assert_eq!(numbers, vec![3, 2, 1]);

        let captured: Vec<Millis> = sw.laps().iter().map(|lap| lap.captured_elapsed).collect();
        assert_eq!(captured, vec![400, 250, 100]);
    }

    #[test]
    fn test_lap_ids_stay_unique_within_one_millisecond() {
        let mut sw = Stopwatch::new();
        sw.start(1_000);
        sw.record_lap(2_000);
        sw.record_lap(2_000);
        sw.record_lap(2_000);

        let ids: Vec<u64> = sw.laps().iter().map(|lap| lap.id).collect();
        assert_eq!(ids, vec![2_002, 2_001, 2_000]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut sw = Stopwatch::new();
        sw.start(0);
        sw.record_lap(500);
        sw.tick(900);
        sw.reset();

        assert_eq!(sw.elapsed_ms(), 0);
        assert_eq!(sw.state(), RunState::Stopped);
        assert!(sw.laps().is_empty());

        sw.start(10_000);
        let lap = sw.record_lap(10_040).cloned();
        assert_eq!(lap.map(|l| (l.lap_number, l.captured_elapsed)), Some((1, 40)));
    }

    #[test]
    fn test_clear_laps_keeps_time_and_state() {
        let mut sw = Stopwatch::new();
        sw.start(0);
        sw.record_lap(100);
        sw.record_lap(200);
        sw.tick(300);
        sw.clear_laps();

        assert!(sw.laps().is_empty());
        assert_eq!(sw.lap_counter(), 0);
        assert_eq!(sw.elapsed_ms(), 300);
        assert!(sw.is_running());

        let lap = sw.record_lap(350).cloned();
        assert_eq!(lap.map(|l| l.lap_number), Some(1));
    }

    #[test]
    fn test_lap_then_pause_then_reset_scenario() {
        let mut sw = Stopwatch::new();
        sw.start(0);
        sw.tick(1500);
        sw.record_lap(1500);

        assert_eq!(sw.laps().len(), 1);
        assert_eq!(sw.laps()[0].lap_number, 1);
        assert_eq!(sw.laps()[0].captured_elapsed, 1500);

        sw.pause(1600);
        sw.reset();
        assert_eq!(sw.elapsed_ms(), 0);
        assert!(sw.laps().is_empty());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00.00");
        assert_eq!(format_time(9), "00:00.00");
        assert_eq!(format_time(999), "00:00.99");
        assert_eq!(format_time(61_010), "01:01.01");
        assert_eq!(format_time(3_661_990), "61:01.99");
    }

    #[test]
    fn test_lap_record_uses_camel_case_fields() {
        let lap = LapRecord {
            id: 1_700_000_000_000,
            lap_number: 2,
            captured_elapsed: 61_010,
        };
        let value = serde_json::to_value(&lap).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1_700_000_000_000u64,
                "lapNumber": 2,
                "capturedElapsed": 61_010,
            })
        );
    }
}

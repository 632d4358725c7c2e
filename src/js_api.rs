//! JavaScript bindings for hosts that render the stopwatch themselves.
//!
//! The handle wraps the same engine the Yew widget uses and reads the wall
//! clock on every call. The host is expected to call `tick()` from its own
//! timer while `isRunning()` is true.

use crate::clock::now_ms;
use crate::{format_time, Stopwatch};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = Stopwatch)]
#[derive(Default)]
pub struct WebStopwatch {
    inner: Stopwatch,
}

#[wasm_bindgen(js_class = Stopwatch)]
impl WebStopwatch {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebStopwatch {
        WebStopwatch::default()
    }

    pub fn start(&mut self) -> bool {
        self.inner.start(now_ms())
    }

    pub fn pause(&mut self) -> bool {
        self.inner.pause(now_ms())
    }

    /// Returns whether the stopwatch is running afterwards.
    pub fn toggle(&mut self) -> bool {
        self.inner.toggle(now_ms());
        self.inner.is_running()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Recompute elapsed time; returns it in milliseconds.
    pub fn tick(&mut self) -> f64 {
        self.inner.tick(now_ms()) as f64
    }

    /// Returns the new lap's number, or `undefined` while stopped.
    #[wasm_bindgen(js_name = recordLap)]
    pub fn record_lap(&mut self) -> Option<u32> {
        self.inner.record_lap(now_ms()).map(|lap| lap.lap_number)
    }

    #[wasm_bindgen(js_name = clearLaps)]
    pub fn clear_laps(&mut self) {
        self.inner.clear_laps();
    }

    #[wasm_bindgen(js_name = elapsedMs)]
    pub fn elapsed_ms(&self) -> f64 {
        self.inner.elapsed_ms() as f64
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    /// Elapsed time as "MM:SS.CC".
    pub fn formatted(&self) -> String {
        format_time(self.inner.elapsed_ms())
    }

    /// Laps, newest first, as `{ id, lapNumber, capturedElapsed }` objects.
    pub fn laps(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.laps()).map_err(Into::into)
    }
}

/// Format milliseconds as "MM:SS.CC".
#[wasm_bindgen(js_name = formatTime)]
pub fn format_time_js(ms: f64) -> String {
    format_time(ms.max(0.0) as u64)
}

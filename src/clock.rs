//! Wall-clock source for the stopwatch.
//!
//! Elapsed time is always derived from wall-clock deltas, never from counting
//! ticks, so late or skipped timer callbacks do not drift the display.

use crate::Millis;

/// Current wall-clock instant in milliseconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
#[inline]
pub fn now_ms() -> Millis {
    js_sys::Date::now() as Millis
}

#[cfg(not(target_arch = "wasm32"))]
#[inline]
pub fn now_ms() -> Millis {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as Millis)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_ms_is_non_decreasing_across_calls() {
        let first = now_ms();
        let second = now_ms();
        assert!(first > 0);
        assert!(second >= first);
    }
}

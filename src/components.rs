//! Pure Yew view components for the stopwatch UI.
//!
//! This module contains stateless components that render based on props,
//! so the same pieces can be reused by any host holding a `Stopwatch`.

use std::collections::VecDeque;
use stopwatch_pro::config::SHORTCUT_HINT;
use stopwatch_pro::{format_time, LapRecord, Millis};
use yew::prelude::*;

/// Formatted elapsed time.
#[derive(Properties, PartialEq)]
pub struct TimeDisplayProps {
    pub elapsed_ms: Millis,
    pub running: bool,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    html! {
        <div class={classes!("time-display", props.running.then_some("running"))}
             role="timer">
            { format_time(props.elapsed_ms) }
        </div>
    }
}

/// Start/Pause, Reset and (while running) Lap buttons.
#[derive(Properties, PartialEq)]
pub struct ControlsProps {
    pub running: bool,
    pub on_toggle: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_lap: Callback<()>,
}

#[function_component(Controls)]
pub fn controls(props: &ControlsProps) -> Html {
    let (toggle_label, toggle_aria, toggle_class) = if props.running {
        ("Pause", "Pause stopwatch", "btn-pause")
    } else {
        ("Start", "Start stopwatch", "btn-start")
    };

    html! {
        <div class="controls">
            <button class={classes!("btn", toggle_class)}
                aria-label={toggle_aria}
                onclick={props.on_toggle.reform(|_: MouseEvent| ())}
            >
                { toggle_label }
            </button>
            <button class="btn btn-reset"
                aria-label="Reset stopwatch"
                onclick={props.on_reset.reform(|_: MouseEvent| ())}
            >
                { "Reset" }
            </button>
            if props.running {
                <button class="btn btn-lap"
                    aria-label="Record lap time"
                    onclick={props.on_lap.reform(|_: MouseEvent| ())}
                >
                    { "Lap" }
                </button>
            }
        </div>
    }
}

#[function_component(ShortcutHint)]
pub fn shortcut_hint() -> Html {
    html! {
        <div class="shortcut-hint">
            <p>{ SHORTCUT_HINT }</p>
        </div>
    }
}

/// Renders the lap table, newest lap first.
///
/// Returns an empty fragment when no laps have been recorded, so the section
/// disappears entirely after a reset or clear.
pub fn render_laps(laps: &VecDeque<LapRecord>, on_clear: &Callback<()>) -> Html {
    if laps.is_empty() {
        return html! {};
    }

    html! {
        <div class="laps">
            <div class="laps-header">
                <h2>{ "Lap Times" }</h2>
                <button class="btn btn-clear"
                    aria-label="Clear all lap times"
                    onclick={on_clear.reform(|_: MouseEvent| ())}
                >
                    { "Clear" }
                </button>
            </div>
            <div class="lap-list">
                { laps.iter().enumerate().map(|(idx, lap)| render_lap_row(lap, idx)).collect::<Html>() }
            </div>
        </div>
    }
}

/// Renders a single lap row; rows alternate between two classes.
fn render_lap_row(lap: &LapRecord, idx: usize) -> Html {
    let stripe = if idx % 2 == 0 { "lap-row-even" } else { "lap-row-odd" };

    html! {
        <div key={lap.id.to_string()} class={classes!("lap-row", stripe)}>
            <span class="lap-number">{ format!("Lap {}", lap.lap_number) }</span>
            <span class="lap-time">{ format_time(lap.captured_elapsed) }</span>
        </div>
    }
}

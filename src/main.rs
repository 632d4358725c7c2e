//! Main module for the Stopwatch Pro application using Yew.
//! Wires the stopwatch hook to the view components.

use log::{info, warn};
use stopwatch_pro::config::{LOG_LEVEL, SUBTITLE, TITLE};
use stopwatch_pro::hooks::use_stopwatch;
use yew::prelude::*;

mod components;

use components::{render_laps, Controls, ShortcutHint, TimeDisplay};

/// Root component: one stopwatch with its controls and lap list.
#[function_component]
pub fn App() -> Html {
    let handle = use_stopwatch();
    let running = handle.stopwatch.is_running();

    html! {
        <div class={classes!("app", running.then_some("running"))}>
            <header class="header">
                <h1>{ TITLE }</h1>
                <p class="subtitle">{ SUBTITLE }</p>
            </header>

            <div class="dial">
                <TimeDisplay elapsed_ms={handle.stopwatch.elapsed_ms()} {running} />
                <Controls
                    {running}
                    on_toggle={handle.on_toggle.clone()}
                    on_reset={handle.on_reset.clone()}
                    on_lap={handle.on_lap.clone()}
                />
                <ShortcutHint />
            </div>

            { render_laps(handle.stopwatch.laps(), &handle.on_clear_laps) }
        </div>
    }
}

/// Entry point: installs panic and log hooks, then renders the App component.
fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(LOG_LEVEL) {
        warn!("Logger already installed: {}", err);
    }
    info!("Starting {}", TITLE);
    yew::Renderer::<App>::new().render();
}

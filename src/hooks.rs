use crate::clock::now_ms;
use crate::config::TICK_INTERVAL_MS;
use crate::input::{KeyAction, KeyListener};
use crate::ticker::IntervalSlot;
use crate::{Millis, Stopwatch};
use gloo_timers::callback::Interval;
use log::{debug, warn};
use std::rc::Rc;
use yew::prelude::*;

/// Reducer actions. Time-dependent actions carry the wall-clock instant at
/// which they were dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchAction {
    Start(Millis),
    Pause(Millis),
    Toggle(Millis),
    Reset,
    RecordLap(Millis),
    ClearLaps,
    Tick(Millis),
}

impl StopwatchAction {
    /// Translate a keyboard shortcut into the action it dispatches.
    pub fn from_key(key: KeyAction, now: Millis) -> Self {
        match key {
            KeyAction::Toggle => StopwatchAction::Toggle(now),
            KeyAction::Reset => StopwatchAction::Reset,
            KeyAction::RecordLap => StopwatchAction::RecordLap(now),
        }
    }
}

impl Reducible for Stopwatch {
    type Action = StopwatchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        // Stray ticks after a pause must not pay for cloning the lap list.
        if matches!(action, StopwatchAction::Tick(_)) && !self.is_running() {
            return self;
        }

        let mut next = (*self).clone();
        match action {
            StopwatchAction::Start(now) => {
                next.start(now);
            }
            StopwatchAction::Pause(now) => {
                next.pause(now);
            }
            StopwatchAction::Toggle(now) => next.toggle(now),
            StopwatchAction::Reset => next.reset(),
            StopwatchAction::RecordLap(now) => {
                next.record_lap(now);
            }
            StopwatchAction::ClearLaps => next.clear_laps(),
            StopwatchAction::Tick(now) => {
                next.tick(now);
            }
        }

        // Handing back the same Rc lets Yew skip the re-render.
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// State and callbacks for a mounted stopwatch.
#[derive(Clone)]
pub struct UseStopwatchHandle {
    /// Current engine state; re-rendered on every change.
    pub stopwatch: UseReducerHandle<Stopwatch>,
    /// Start when stopped, pause when running.
    pub on_toggle: Callback<()>,
    pub on_reset: Callback<()>,
    /// Record a lap; ignored while stopped.
    pub on_lap: Callback<()>,
    pub on_clear_laps: Callback<()>,
}

/// Custom hook owning a stopwatch, its display tick and its keyboard
/// shortcuts.
///
/// The tick is armed when the stopwatch enters `Running` and disarmed when it
/// leaves it or when the component unmounts.
#[hook]
pub fn use_stopwatch() -> UseStopwatchHandle {
    let stopwatch = use_reducer(Stopwatch::new);
    let ticker = use_mut_ref(IntervalSlot::new);

    {
        let dispatcher = stopwatch.dispatcher();
        use_effect_with(stopwatch.is_running(), move |&running| {
            let changed = ticker.borrow_mut().sync(running, || {
                Interval::new(TICK_INTERVAL_MS, move || {
                    dispatcher.dispatch(StopwatchAction::Tick(now_ms()));
                })
            });
            if changed {
                debug!("Tick {}", if running { "armed" } else { "disarmed" });
            }

            move || {
                ticker.borrow_mut().disarm();
            }
        });
    }

    use_keyboard_shortcuts(stopwatch.dispatcher());

    let on_toggle = {
        let dispatcher = stopwatch.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(StopwatchAction::Toggle(now_ms())))
    };
    let on_reset = {
        let dispatcher = stopwatch.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(StopwatchAction::Reset))
    };
    let on_lap = {
        let dispatcher = stopwatch.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(StopwatchAction::RecordLap(now_ms())))
    };
    let on_clear_laps = {
        let dispatcher = stopwatch.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(StopwatchAction::ClearLaps))
    };

    UseStopwatchHandle {
        stopwatch,
        on_toggle,
        on_reset,
        on_lap,
        on_clear_laps,
    }
}

/// Registers the window-wide shortcuts for the lifetime of the calling
/// component.
#[hook]
pub fn use_keyboard_shortcuts(dispatcher: UseReducerDispatcher<Stopwatch>) {
    use_effect_with((), move |_| {
        let listener = KeyListener::attach(&gloo_utils::window(), move |key| {
            dispatcher.dispatch(StopwatchAction::from_key(key, now_ms()));
        });
        if let Err(err) = &listener {
            warn!("{}", err);
        }

        // Dropping the guard removes the listener.
        move || drop(listener)
    });
}

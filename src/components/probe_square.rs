//! The animated probe square.
//!
//! ARCHITECTURE
//! ============
//! On hydration this inserts the square, waits one second, then starts the
//! slide and the probe request back to back and recolors the square once
//! both have finished. The view only mirrors `ProbeState`; every rule about
//! ordering lives in `state::probe`.

use leptos::prelude::*;

use crate::state::probe::ProbeState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use std::time::Duration;

#[cfg(feature = "hydrate")]
use futures::channel::oneshot;
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

#[cfg(feature = "hydrate")]
use crate::net::api::fetch_probe;
#[cfg(feature = "hydrate")]
use crate::state::probe::ProbePhase;
#[cfg(feature = "hydrate")]
use crate::util::transition::SLIDE;

/// Side length of the probe square, px.
pub const SQUARE_SIZE_PX: f64 = 100.0;

/// Pause between inserting the square and starting the slide + request.
#[cfg(feature = "hydrate")]
const START_DELAY_MS: u64 = 1000;

/// Slide tick cadence.
#[cfg(feature = "hydrate")]
const SLIDE_TICK_MS: u32 = 33;

/// Probe square component.
///
/// Renders the square at the top-left corner and, in the browser, runs the
/// whole probe sequence against `url` exactly once.
#[component]
pub fn ProbeSquare(url: String) -> impl IntoView {
    let probe = expect_context::<RwSignal<ProbeState>>();

    #[cfg(feature = "hydrate")]
    {
        let slide_tick: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

        {
            let slide_tick = Rc::clone(&slide_tick);
            let url = url.clone();
            Effect::new(move || {
                if probe.with_untracked(|p| p.phase != ProbePhase::Unstarted) {
                    return;
                }
                probe.update(|p| p.insert());
                let slide_tick = Rc::clone(&slide_tick);
                let url = url.clone();
                leptos::task::spawn_local(async move {
                    run_probe(probe, &slide_tick, &url).await;
                });
            });
        }

        {
            let slide_tick = Rc::clone(&slide_tick);
            on_cleanup(move || {
                slide_tick.borrow_mut().take();
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &url;
    }

    view! {
        <div
            class="probe-square"
            style:position="absolute"
            style:top="0"
            style:left="0"
            style:width=format!("{SQUARE_SIZE_PX}px")
            style:height=format!("{SQUARE_SIZE_PX}px")
            style:background-color=move || probe.get().fill.css()
            style:transform=move || {
                let offset_x = probe.get().offset_x;
                format!("translateX({offset_x}px)")
            }
        ></div>
    }
}

/// Delay, then run the slide and the request together and settle the fill
/// once both are done.
#[cfg(feature = "hydrate")]
async fn run_probe(probe: RwSignal<ProbeState>, slide_tick: &Rc<RefCell<Option<Interval>>>, url: &str) {
    probe.update(|p| p.begin_delay());
    gloo_timers::future::sleep(Duration::from_millis(START_DELAY_MS)).await;
    probe.update(|p| p.begin_run());
    log::debug!("probe running against {url}");

    // The slide and the request start back to back, with no suspension in
    // between.
    let (slide_done_tx, slide_done_rx) = oneshot::channel::<()>();
    *slide_tick.borrow_mut() = Some(start_slide(probe, slide_done_tx));

    let slide_finished = async {
        let _ = slide_done_rx.await;
        slide_tick.borrow_mut().take();
    };
    let (outcome, ()) = futures::join!(fetch_probe(url), slide_finished);

    probe.update(|p| {
        p.record_outcome(outcome);
        if p.try_settle() {
            log::info!("probe settled: fill={}", p.fill.css());
        }
    });
}

/// Drive the square's offset until the slide completes, then signal `done`.
///
/// Elapsed time is sampled per tick so the terminal position lands on the
/// exact slide distance regardless of tick jitter.
#[cfg(feature = "hydrate")]
fn start_slide(probe: RwSignal<ProbeState>, done: oneshot::Sender<()>) -> Interval {
    let started_ms = js_sys::Date::now();
    let mut done = Some(done);
    Interval::new(SLIDE_TICK_MS, move || {
        let elapsed_ms = (js_sys::Date::now() - started_ms).max(0.0);
        if SLIDE.is_complete(elapsed_ms) {
            probe.update(|p| p.finish_slide(SLIDE.distance_px));
            if let Some(done) = done.take() {
                let _ = done.send(());
            }
        } else {
            probe.update(|p| p.set_offset(SLIDE.offset_at(elapsed_ms)));
        }
    })
}

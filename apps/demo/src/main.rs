//! Drives a [`PanelContainer`] through a scripted session: a button click,
//! a tap to close, a drag that is released mid-way, and a fling.

mod script;

use anyhow::{ensure, Context, Result};
use slidemenu_ui::prelude::*;
use slidemenu_ui::{Constraints, DisplayMetrics};

use crate::script::{Panel, Step, Timeline};

const SCREEN_WIDTH: f32 = 1080.0;
const SCREEN_HEIGHT: f32 = 1920.0;
const FRAME_MS: u64 = 16;

fn init_logging() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let density = std::env::var("SLIDEMENU_DENSITY")
        .ok()
        .and_then(|value| value.parse::<f32>().ok());
    let config = SurfaceConfig::for_display(DisplayMetrics::from_reported(density));
    let mut container = PanelContainer::new(config);
    container.set_on_state_changed_listener(|open| {
        log::info!("menu is now {}", if open { "open" } else { "closed" });
    });

    container
        .measure(Constraints::tight(SCREEN_WIDTH, SCREEN_HEIGHT))
        .context("measuring the container")?;
    container.layout();

    let mut content = Panel::new("content");
    let mut menu = Panel::new("menu");
    let mut timeline = Timeline::default();

    for step in script::session(SCREEN_WIDTH, SCREEN_HEIGHT) {
        match step {
            Step::Click => {
                log::info!("clicking the menu button");
                container.perform_click();
            }
            Step::Touch(event) => {
                let event = timeline.stamp(event);
                let route = container.dispatch_touch_event(&event, &mut content, &mut menu);
                log::debug!("{:?} -> {route:?}", event.action);
            }
            Step::Wait(ms) => timeline.advance(ms),
            Step::Settle => {
                let frames = timeline.settle(&mut container, FRAME_MS);
                log::info!(
                    "settled after {frames} frames at offset {}",
                    container.surface().scroll_x()
                );
            }
        }
    }

    ensure!(
        container.is_open(),
        "session should end with the menu open after the final fling"
    );
    log::info!(
        "content saw {} events, menu saw {}",
        content.events(),
        menu.events()
    );
    Ok(())
}

use crux_core::{render::render, Command};

use crate::commands::page::PageOutput;
use crate::events::Event;
use crate::model::Model;
use crate::text_post;
use crate::{Effect, PageCmd};

const RESTART_PROMPT: &str = "Are you sure you want to restart the hub?";
const RESTART_ERROR: &str = "Error restarting device";

/// Handle device action events (restart)
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Restart => PageCmd::confirm(RESTART_PROMPT).build().then_send(|output| {
            Event::RestartConfirmed(matches!(output, PageOutput::Confirmed(true)))
        }),

        // Declined: no request is sent and nothing changes
        Event::RestartConfirmed(false) => Command::done(),

        Event::RestartConfirmed(true) => {
            model.start_loading();
            Command::all([render(), text_post!("/restart", RestartResponse)])
        }

        Event::RestartResponse(result) => match result {
            Ok(text) => model.show_status_and_render(text, true),
            Err(e) => {
                log::error!("Error restarting device: {e}");
                model.show_status_and_render(RESTART_ERROR, false)
            }
        },

        _ => unreachable!("Non-device event passed to device handler"),
    }
}

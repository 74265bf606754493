mod device;
mod settings;
mod ui;

pub use settings::RELOAD_DELAY_MS;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Settings domain (load and save)
        Event::Load | Event::LoadResponse(_) | Event::Save { .. } | Event::SaveResponse(_) => {
            settings::handle(event, model)
        }

        // Device actions domain
        Event::Restart | Event::RestartConfirmed(_) | Event::RestartResponse(_) => {
            device::handle(event, model)
        }

        // UI actions domain
        Event::ClearStatus => ui::handle(event, model),
    }
}

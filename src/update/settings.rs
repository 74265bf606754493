use crux_core::{render::render, Command};

use crate::events::Event;
use crate::json_get;
use crate::model::Model;
use crate::text_post;
use crate::types::{SaveRequest, SettingsForm};
use crate::{Effect, PageCmd};

/// Delay between a successful save and the automatic settings reload
pub const RELOAD_DELAY_MS: u64 = 3000;

const LOAD_ERROR: &str = "Error loading configuration";
const SAVE_ERROR: &str = "Error saving configuration";

/// Handle settings events (load and save)
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Load => {
            model.start_loading();
            Command::all([render(), json_get!("/config", LoadResponse)])
        }

        Event::LoadResponse(result) => match result {
            Ok(settings) => {
                model.stop_loading();
                // The device never discloses the WiFi credential, so whatever
                // the user has typed into that field survives a reload.
                let wifi_password = std::mem::take(&mut model.form.wifi_password);
                model.form = SettingsForm::from(settings);
                model.form.wifi_password = wifi_password;
                render()
            }
            Err(e) => {
                log::error!("Error loading config: {e}");
                model.show_status_and_render(LOAD_ERROR, false)
            }
        },

        Event::Save { form } => {
            model.start_loading();
            let request = SaveRequest::from(form);
            match text_post!("/save", SaveResponse, body_json: &request) {
                Ok(post) => Command::all([render(), post]),
                Err(e) => {
                    log::error!("Failed to create save request: {e}");
                    model.show_status_and_render(SAVE_ERROR, false)
                }
            }
        }

        Event::SaveResponse(result) => match result {
            Ok(text) => {
                model.show_status(text, true);
                // The saved settings take effect on the device; re-fetch them
                // once the delay elapses
                Command::all([
                    render(),
                    PageCmd::delay(RELOAD_DELAY_MS)
                        .build()
                        .then_send(|_| Event::Load),
                ])
            }
            Err(e) => {
                log::error!("Error saving config: {e}");
                model.show_status_and_render(SAVE_ERROR, false)
            }
        },

        _ => unreachable!("Non-settings event passed to settings handler"),
    }
}

use super::*;
use crate::update::RELOAD_DELAY_MS;
use crux_core::testing::{AppTester, Update};
use crux_http::protocol::HttpRequest;

fn filled_form() -> SettingsForm {
    SettingsForm {
        hub_id: "H-0".to_string(),
        wifi_ssid: "garden".to_string(),
        wifi_password: "hunter2".to_string(),
        mqtt_server: "10.0.0.2".to_string(),
        mqtt_port: "8883".to_string(),
        mqtt_username: "hub".to_string(),
        mqtt_password: "secret".to_string(),
    }
}

fn http_requests(update: &Update<Effect, Event>) -> Vec<&HttpRequest> {
    update
        .effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Http(request) => Some(&request.operation),
            _ => None,
        })
        .collect()
}

fn page_operations(update: &Update<Effect, Event>) -> Vec<PageOperation> {
    update
        .effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Page(request) => Some(request.operation.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_load_sets_loading_and_requests_config() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let update = app.update(Event::Load, &mut model);

    assert!(model.is_loading);
    let requests = http_requests(&update);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].url, "https://relative/config");
}

#[test]
fn test_load_clears_prior_status() {
    let app = AppTester::<App>::default();
    let mut model = Model {
        status: Some(StatusLine {
            message: "Configuration saved. The system will restart.".to_string(),
            success: true,
        }),
        ..Default::default()
    };

    let _update = app.update(Event::Load, &mut model);

    // A freshly loaded page starts with an empty status region
    assert_eq!(model.status, None);
}

#[test]
fn test_load_response_populates_fields_and_defaults() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let settings = StoredSettings {
        hub_id: "hub-7".to_string(),
        mqtt_port: Some(8883),
        ..Default::default()
    };
    let _update = app.update(Event::LoadResponse(Ok(settings)), &mut model);

    assert_eq!(model.form.hub_id, "hub-7");
    assert_eq!(model.form.mqtt_port, "8883");
    assert_eq!(model.form.wifi_ssid, "");
    assert_eq!(model.form.mqtt_server, "");
    assert_eq!(model.form.mqtt_username, "");
    assert_eq!(model.form.mqtt_password, "");
    assert!(!model.is_loading);
    assert_eq!(model.status, None);
}

#[test]
fn test_load_response_defaults_mqtt_port() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _update = app.update(Event::LoadResponse(Ok(StoredSettings::default())), &mut model);

    assert_eq!(model.form.mqtt_port, "1883");
}

#[test]
fn test_load_never_writes_wifi_password() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();
    model.form.wifi_password = "typed-but-not-saved".to_string();

    let _update = app.update(Event::LoadResponse(Ok(StoredSettings::default())), &mut model);

    assert_eq!(model.form.wifi_password, "typed-but-not-saved");
}

#[test]
fn test_load_failure_shows_error_status() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _update = app.update(
        Event::LoadResponse(Err("connection refused".to_string())),
        &mut model,
    );

    assert_eq!(
        model.status,
        Some(StatusLine {
            message: "Error loading configuration".to_string(),
            success: false,
        })
    );
    // Form fields stay at their defaults
    assert_eq!(model.form, SettingsForm::default());
}

#[test]
fn test_save_posts_exactly_seven_fields() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let update = app.update(
        Event::Save {
            form: filled_form(),
        },
        &mut model,
    );

    assert!(model.is_loading);
    let requests = http_requests(&update);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].url, "https://relative/save");

    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 7);
    assert_eq!(object["hub_id"], "H-0");
    assert_eq!(object["wifi_ssid"], "garden");
    assert_eq!(object["wifi_password"], "hunter2");
    assert_eq!(object["mqtt_server"], "10.0.0.2");
    assert_eq!(object["mqtt_port"], 8883);
    assert_eq!(object["mqtt_username"], "hub");
    assert_eq!(object["mqtt_password"], "secret");
}

#[test]
fn test_save_with_non_numeric_port_sends_null() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let mut form = filled_form();
    form.mqtt_port = "abc".to_string();
    let update = app.update(Event::Save { form }, &mut model);

    let requests = http_requests(&update);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["mqtt_port"], serde_json::Value::Null);
}

#[test]
fn test_save_with_empty_port_sends_null() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let mut form = filled_form();
    form.mqtt_port = String::new();
    let update = app.update(Event::Save { form }, &mut model);

    let requests = http_requests(&update);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["mqtt_port"], serde_json::Value::Null);
}

#[test]
fn test_save_with_out_of_range_port_sends_it_unclamped() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let mut form = filled_form();
    form.mqtt_port = "70000".to_string();
    let update = app.update(Event::Save { form }, &mut model);

    let requests = http_requests(&update);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["mqtt_port"], 70000);
}

#[test]
fn test_save_success_shows_server_text_and_schedules_reload() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let update = app.update(
        Event::SaveResponse(Ok(
            "Configuration saved. The system will restart.".to_string()
        )),
        &mut model,
    );

    assert_eq!(
        model.status,
        Some(StatusLine {
            message: "Configuration saved. The system will restart.".to_string(),
            success: true,
        })
    );
    assert_eq!(
        page_operations(&update),
        vec![PageOperation::Delay {
            duration_ms: RELOAD_DELAY_MS
        }]
    );
}

#[test]
fn test_save_failure_shows_error_and_schedules_no_reload() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let update = app.update(
        Event::SaveResponse(Err("connection refused".to_string())),
        &mut model,
    );

    assert_eq!(
        model.status,
        Some(StatusLine {
            message: "Error saving configuration".to_string(),
            success: false,
        })
    );
    assert!(page_operations(&update).is_empty());
}

#[test]
fn test_restart_asks_for_confirmation_without_requests() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let update = app.update(Event::Restart, &mut model);

    assert_eq!(
        page_operations(&update),
        vec![PageOperation::Confirm {
            message: "Are you sure you want to restart the hub?".to_string()
        }]
    );
    assert!(http_requests(&update).is_empty());
    assert_eq!(model, Model::default());
}

#[test]
fn test_restart_declined_does_nothing() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let update = app.update(Event::RestartConfirmed(false), &mut model);

    assert!(update.effects.is_empty());
    assert!(update.events.is_empty());
    assert_eq!(model, Model::default());
}

#[test]
fn test_restart_confirmed_posts_restart() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let update = app.update(Event::RestartConfirmed(true), &mut model);

    let requests = http_requests(&update);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].url, "https://relative/restart");
    assert!(requests[0].body.is_empty());
}

#[test]
fn test_restart_response_shows_server_text() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _update = app.update(
        Event::RestartResponse(Ok("Restarting...".to_string())),
        &mut model,
    );

    assert_eq!(
        model.status,
        Some(StatusLine {
            message: "Restarting...".to_string(),
            success: true,
        })
    );
}

#[test]
fn test_restart_failure_shows_error_status() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _update = app.update(
        Event::RestartResponse(Err("connection refused".to_string())),
        &mut model,
    );

    assert_eq!(
        model.status,
        Some(StatusLine {
            message: "Error restarting device".to_string(),
            success: false,
        })
    );
}

#[test]
fn test_status_overwrites_previous_status() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _update = app.update(
        Event::SaveResponse(Err("connection refused".to_string())),
        &mut model,
    );
    let _update = app.update(
        Event::RestartResponse(Ok("Restarting...".to_string())),
        &mut model,
    );

    assert_eq!(
        model.status,
        Some(StatusLine {
            message: "Restarting...".to_string(),
            success: true,
        })
    );
}

#[test]
fn test_clear_status() {
    let app = AppTester::<App>::default();
    let mut model = Model {
        status: Some(StatusLine {
            message: "Some error".to_string(),
            success: false,
        }),
        ..Default::default()
    };

    let _update = app.update(Event::ClearStatus, &mut model);

    assert_eq!(model.status, None);
}

#[test]
fn test_stored_settings_ignore_password_placeholder() {
    // The firmware sends a blank wifi_password placeholder in /config
    let json = r#"{"hub_id":"hub-7","mqtt_port":8883,"wifi_password":""}"#;
    let settings: StoredSettings = serde_json::from_str(json).unwrap();

    let form = SettingsForm::from(settings);
    assert_eq!(form.hub_id, "hub-7");
    assert_eq!(form.mqtt_port, "8883");
    assert_eq!(form.wifi_password, "");
}

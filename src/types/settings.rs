use serde::{Deserialize, Serialize};

/// Fallback MQTT broker port when the device has none stored
pub const DEFAULT_MQTT_PORT: i64 = 1883;

/// Settings as returned by `GET /config`.
///
/// Every field is optional on the wire. The firmware sends a blank
/// `wifi_password` placeholder instead of the real credential; the field is
/// not modelled here, so it is ignored during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredSettings {
    #[serde(default)]
    pub hub_id: String,
    #[serde(default)]
    pub wifi_ssid: String,
    #[serde(default)]
    pub mqtt_server: String,
    #[serde(default)]
    pub mqtt_port: Option<i64>,
    #[serde(default)]
    pub mqtt_username: String,
    #[serde(default)]
    pub mqtt_password: String,
}

/// The editable form field values, mirrored into the shell's inputs.
///
/// All fields are strings, `mqtt_port` included: it holds whatever the user
/// typed and is only coerced to a number when the form is submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingsForm {
    pub hub_id: String,
    pub wifi_ssid: String,
    pub wifi_password: String,
    pub mqtt_server: String,
    pub mqtt_port: String,
    pub mqtt_username: String,
    pub mqtt_password: String,
}

impl From<StoredSettings> for SettingsForm {
    /// Build a fully populated form, substituting defaults for absent fields.
    /// `wifi_password` stays empty: the device never discloses it.
    fn from(settings: StoredSettings) -> Self {
        Self {
            hub_id: settings.hub_id,
            wifi_ssid: settings.wifi_ssid,
            wifi_password: String::new(),
            mqtt_server: settings.mqtt_server,
            mqtt_port: settings
                .mqtt_port
                .unwrap_or(DEFAULT_MQTT_PORT)
                .to_string(),
            mqtt_username: settings.mqtt_username,
            mqtt_password: settings.mqtt_password,
        }
    }
}

/// Body of `POST /save`: exactly the seven settings fields.
///
/// `mqtt_port` serializes as `null` when the form text did not parse as an
/// integer; the device is the one that decides what to do with the value.
/// The field is a plain integer rather than a port-sized one, so out-of-range
/// entries like 70000 still reach the device unclamped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveRequest {
    pub hub_id: String,
    pub wifi_ssid: String,
    pub wifi_password: String,
    pub mqtt_server: String,
    pub mqtt_port: Option<i64>,
    pub mqtt_username: String,
    pub mqtt_password: String,
}

impl From<SettingsForm> for SaveRequest {
    fn from(form: SettingsForm) -> Self {
        Self {
            hub_id: form.hub_id,
            wifi_ssid: form.wifi_ssid,
            wifi_password: form.wifi_password,
            mqtt_server: form.mqtt_server,
            mqtt_port: form.mqtt_port.trim().parse().ok(),
            mqtt_username: form.mqtt_username,
            mqtt_password: form.mqtt_password,
        }
    }
}

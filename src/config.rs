use std::time::Duration;

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::airtable::AirtableCredentials;

/// Variable names used by the original deployment. They take precedence over
/// the layered configuration when set.
const AIRTABLE_VARIABLES: [(&str, &str); 3] = [
    ("airtable.api_key", "AIRTABLE_API_KEY"),
    ("airtable.base_id", "AIRTABLE_BASE_ID"),
    ("airtable.table_name", "AIRTABLE_TABLE_NAME"),
];

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub log_level: String,
    pub application: ApplicationSettings,
    pub airtable: AirtableSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

/// Connection details for the Airtable table collecting the RSVPs.
///
/// The secrets are optional on purpose: the server starts without them and
/// every submission reports a configuration error until they are provided.
#[derive(Deserialize, Clone)]
pub struct AirtableSettings {
    pub api_base_url: String,
    pub api_key: Option<Secret<String>>,
    pub base_id: Option<String>,
    pub table_name: Option<String>,
    pub timeout_milliseconds: Option<u64>,
}

impl AirtableSettings {
    /// Returns `None` unless all three secrets are present and non-empty.
    pub fn credentials(&self) -> Option<AirtableCredentials> {
        let api_key = self
            .api_key
            .as_ref()
            .filter(|key| !key.expose_secret().is_empty())?;
        let base_id = self.base_id.as_ref().filter(|id| !id.is_empty())?;
        let table_name = self.table_name.as_ref().filter(|name| !name.is_empty())?;

        Some(AirtableCredentials {
            api_key: api_key.clone(),
            base_id: base_id.clone(),
            table_name: table_name.clone(),
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_milliseconds.map(Duration::from_millis)
    }
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}

/// Load `configuration/base.yaml`, then the file named after `APP_ENVIRONMENT`
/// (`local` by default), then `APP_`-prefixed environment variables, e.g.
/// `APP_AIRTABLE__TABLE_NAME=Guests` -> `Settings.airtable.table_name`.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("No current directory: {e}")))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let mut builder = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    for (key, variable) in AIRTABLE_VARIABLES {
        if let Ok(value) = std::env::var(variable) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()?.try_deserialize::<Settings>()
}

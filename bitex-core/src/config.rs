use bitex_common::{ExchangeName, UnknownExchange};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::exchange::{Endpoint, EndpointRoute, EndpointTable, ExchangeError, Verb};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error(transparent)]
    UnknownExchange(#[from] UnknownExchange),

    #[error("Invalid settings for {exchange}: {source}")]
    Invalid {
        exchange: String,
        #[source]
        source: ExchangeError,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointSettings {
    pub verb: String,
    pub path: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExchangeSettings {
    #[serde(default)]
    pub supported_pairs: Option<Vec<String>>,
    #[serde(default)]
    pub endpoints: HashMap<String, EndpointSettings>,
}

impl ExchangeSettings {
    /// Parse the configured endpoints into a routing table
    pub fn endpoint_table(&self) -> Result<EndpointTable, ExchangeError> {
        let mut table = EndpointTable::new();
        for (name, endpoint) in &self.endpoints {
            let verb: Verb = endpoint.verb.parse()?;
            table.insert(name.parse::<Endpoint>()?, EndpointRoute::new(verb, &endpoint.path));
        }
        Ok(table)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub exchanges: HashMap<String, ExchangeSettings>,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// `BITEX_*` overrides, e.g. `BITEX_EXCHANGES__KRAKEN__SUPPORTED_PAIRS=XBTUSD,ETHUSD`.
///
/// Pair lists are comma separated; every other value is taken as a scalar.
fn environment() -> Environment {
    ExchangeName::ALL.iter().fold(
        Environment::with_prefix("BITEX")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(","),
        |env, name| {
            env.with_list_parse_key(&format!("exchanges.{}.supported_pairs", name.as_str()))
        },
    )
}

impl Settings {
    /// Load `config/default`, `config/{RUN_MODE}` and `BITEX_*` overrides
    pub fn new() -> Result<Self, SettingsError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        Self::build(builder)
    }

    /// Load a single settings file plus `BITEX_*` overrides
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let builder = Config::builder().add_source(File::from(path).required(true));
        Self::build(builder)
    }

    /// Parse settings from TOML text, without environment overrides
    pub fn from_toml(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        Self::build_with(builder, environment())
    }

    fn build_with(
        builder: ConfigBuilder<DefaultState>,
        env: Environment,
    ) -> Result<Self, SettingsError> {
        let settings: Settings = builder.add_source(env).build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject unknown exchanges and malformed endpoint tables up front
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (name, exchange) in &self.exchanges {
            name.parse::<ExchangeName>()?;
            exchange
                .endpoint_table()
                .map_err(|source| SettingsError::Invalid {
                    exchange: name.clone(),
                    source,
                })?;
        }
        Ok(())
    }

    pub fn exchange(&self, name: ExchangeName) -> Option<&ExchangeSettings> {
        self.exchanges.get(name.as_str())
    }
}

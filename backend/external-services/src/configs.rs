use std::path::PathBuf;

use common_utils::consts;
use domain_types::types::{EnvironmentContext, GatewayEnvironment};
use hyperswitch_masking::{PeekInterface, Secret};

use crate::logger::config::Log;

/// Deployment the process runs as. Picks the config file under `config/`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Env {
    #[default]
    Development,
    Sandbox,
    Production,
}

impl Env {
    pub fn current_env() -> Self {
        std::env::var(consts::ENV_SELECTOR)
            .ok()
            .and_then(|env| env.parse().ok())
            .unwrap_or_default()
    }

    pub fn config_path(&self) -> String {
        format!("{self}.toml")
    }
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Config {
    pub braspag: Braspag,
    #[serde(default)]
    pub http_client: HttpClient,
    #[serde(default)]
    pub log: Log,
}

/// Merchant credentials and gateway hosts
#[derive(Clone, serde::Deserialize, Debug)]
pub struct Braspag {
    pub merchant_id: Secret<String>,
    #[serde(default)]
    pub environment: GatewayEnvironment,
    /// Overrides the card transaction host of `environment`
    pub braspag_url: Option<String>,
    /// Overrides the protected card host of `environment`
    pub protected_card_url: Option<String>,
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct HttpClient {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    pub proxy_url: Option<String>,
}

fn default_timeout_secs() -> u64 {
    consts::REQUEST_TIME_OUT
}

impl Default for HttpClient {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            proxy_url: None,
        }
    }
}

impl Braspag {
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.merchant_id.peek().trim().is_empty() {
            return Err(config::ConfigError::Message(
                "braspag.merchant_id must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl HttpClient {
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "http_client.timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Config {
    /// Function to build the configuration by picking it from default locations
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::new_with_config_path(None)
    }

    /// Function to build the configuration by picking it from default locations
    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> Result<Self, config::ConfigError> {
        let env = Env::current_env();
        let config_path = Self::config_path(&env, explicit_config_path);

        let builder = Self::builder(&env)?
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(consts::ENV_PREFIX)
                    .try_parsing(true)
                    .separator("__"),
            );

        Self::from_builder(builder)
    }

    pub fn builder(
        environment: &Env,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            // "env" always mirrors the selected deployment and can't be set from a file.
            .set_override("env", environment.to_string())
    }

    /// Deserializes and validates whatever sources `builder` was given.
    pub fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        #[allow(clippy::print_stderr)]
        let config: Self = serde_path_to_error::deserialize(builder.build()?).map_err(|error| {
            eprintln!("Unable to deserialize application configuration: {error}");
            error.into_inner()
        })?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), config::ConfigError> {
        self.braspag.validate()?;
        self.http_client.validate()
    }

    /// Config path.
    pub fn config_path(environment: &Env, explicit_config_path: Option<PathBuf>) -> PathBuf {
        let mut config_path = PathBuf::new();
        if let Some(explicit_config_path_val) = explicit_config_path {
            config_path.push(explicit_config_path_val);
        } else {
            let config_directory: String = "config".into();
            let config_file_name = environment.config_path();

            config_path.push(workspace_path());
            config_path.push(config_directory);
            config_path.push(config_file_name);
        }
        config_path
    }

    /// Gateway context every connector operation runs under
    pub fn environment_context(&self) -> EnvironmentContext {
        let Braspag {
            merchant_id,
            environment,
            braspag_url,
            protected_card_url,
        } = &self.braspag;

        let mut context = EnvironmentContext::new(merchant_id.clone(), *environment);
        if let Some(url) = braspag_url {
            context = context.with_braspag_url(url.as_str());
        }
        if let Some(url) = protected_card_url {
            context = context.with_protected_card_url(url.as_str());
        }
        context
    }
}

pub fn workspace_path() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let mut path = PathBuf::from(manifest_dir);
        path.pop();
        path.pop();
        path
    } else {
        PathBuf::from(".")
    }
}

use std::env;
use anyhow::Context;
use config::{Config, File};
use crate::client::api_paths::DEFAULT_BACKEND_URL;
use crate::domain::user::UserId;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 3000;

/// Settings of the activity page. Environment variables precede the configuration file.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend_url: String,
    pub default_user: Option<UserId>
}

impl AppConfig {
    /// Reads the YAML file at the given path (which may be missing) and the environment.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name(path).required(false))
            .build()?;
        Self::from_config(&config, |name| env::var(name).ok())
    }

    fn from_config(config: &Config, env: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = env("HOST")
            .unwrap_or_else(|| config.get_string("server.host")
                .unwrap_or(DEFAULT_HOST.to_string()));

        let port = match env("PORT").or_else(|| config.get_string("server.port").ok()) {
            Some(port) => port.parse::<u16>().with_context(|| format!("The port must be numeric, got {port}"))?,
            None => DEFAULT_PORT
        };

        let backend_url = env("BACKEND_URL")
            .unwrap_or_else(|| config.get_string("backend.url")
                .unwrap_or(DEFAULT_BACKEND_URL.to_string()));

        let default_user = env("USER_ID")
            .or_else(|| config.get_string("session.user_id").ok())
            .filter(|id| !id.is_empty())
            .map(UserId::new);

        Ok(Self { host, port, backend_url, default_user })
    }
}

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub template_dir: String,
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub cookie_name: String,
    pub secure: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub bcrypt_cost: u32,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            self.name
        )
    }
}

// Variable names understood by deployments that predate the `APP__*` scheme,
// with the `__`-separated key each one feeds.
const LEGACY_ENV: &[(&str, &str)] = &[
    ("DB_HOST", "DATABASE__HOST"),
    ("DB_USER", "DATABASE__USER"),
    ("DB_PASSWORD", "DATABASE__PASSWORD"),
    ("DB_NAME", "DATABASE__NAME"),
    ("SECRET_KEY", "SESSION__SECRET"),
    ("PORT", "SERVER__PORT"),
];

fn legacy_env(env: Option<&HashMap<String, String>>) -> HashMap<String, String> {
    LEGACY_ENV
        .iter()
        .filter_map(|(name, key)| {
            let value = match env {
                Some(env) => env.get(*name).cloned(),
                None => std::env::var(name).ok(),
            };
            value.map(|value| (key.to_string(), value))
        })
        .collect()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Builds the configuration from defaults, the optional `config/default`
    /// file, the legacy `DB_*`/`SECRET_KEY`/`PORT` variables and finally
    /// `APP__*` variables. `env` replaces the process environment when given.
    pub fn load_from(env: Option<HashMap<String, String>>) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.template_dir", "templates")?
            .set_default("server.static_dir", "static")?
            .set_default("database.host", "localhost")?
            .set_default("database.port", 3306)?
            .set_default("database.user", "root")?
            .set_default("database.password", "root")?
            .set_default("database.name", "smartassess")?
            .set_default("database.max_connections", 5)?
            .set_default("session.secret", "smartassess_secret")?
            .set_default("session.cookie_name", "session")?
            .set_default("session.secure", false)?
            .set_default("auth.bcrypt_cost", i64::from(bcrypt::DEFAULT_COST))?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(legacy_env(env.as_ref()))),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        config.try_deserialize()
    }
}

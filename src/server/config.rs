use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use crate::server::{
    error::{config::ConfigError, AppError},
    model::slide::ListMode,
};

const DEFAULT_DB_HOST: &str = "127.0.0.1";
const DEFAULT_DB_PORT: u16 = 3306;
const DEFAULT_DB_USER: &str = "root";
const DEFAULT_DB_NAME: &str = "main";
const DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_STATIC_DIR: &str = "./docs";
const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Where the MySQL database lives and how to log in.
///
/// Either a complete `DATABASE_URL` or the individual `DB_*` parts. The parts form is what
/// the container setup provides; the URL form is handy for local development.
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseTarget {
    Url(String),
    Parts {
        host: String,
        port: u16,
        user: String,
        password: String,
        name: String,
    },
}

impl DatabaseTarget {
    /// Connection URL handed to SeaORM.
    pub fn url(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Parts {
                host,
                port,
                user,
                password,
                name,
            } => format!("mysql://{}:{}@{}:{}/{}", user, password, host, port, name),
        }
    }

    /// Loggable description of the target that never includes the password.
    pub fn redacted(&self) -> String {
        match self {
            Self::Url(url) => match url.split_once('@') {
                Some((_, rest)) => format!("***@{}", rest),
                None => url.clone(),
            },
            Self::Parts {
                host,
                port,
                user,
                name,
                ..
            } => format!("{}@{}:{}/{}", user, host, port, name),
        }
    }
}

pub struct Config {
    pub database: DatabaseTarget,
    pub db_connect_timeout: Duration,

    pub listen_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub max_body_bytes: usize,

    pub list_mode: ListMode,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Unset and empty variables are treated alike and fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let database = match var("DATABASE_URL") {
            Some(url) => DatabaseTarget::Url(url),
            None => DatabaseTarget::Parts {
                host: var("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
                port: parse_or(var("DB_PORT"), "DB_PORT", DEFAULT_DB_PORT)?,
                user: var("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.to_string()),
                password: var("DB_PASSWORD")
                    .ok_or_else(|| ConfigError::MissingEnvVar("DB_PASSWORD".to_string()))?,
                name: var("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            },
        };

        let connect_timeout_secs = parse_or(
            var("DB_CONNECT_TIMEOUT_SECS"),
            "DB_CONNECT_TIMEOUT_SECS",
            DEFAULT_DB_CONNECT_TIMEOUT_SECS,
        )?;

        let listen_addr = var("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

        Ok(Self {
            database,
            db_connect_timeout: Duration::from_secs(connect_timeout_secs),
            listen_addr: parse_var(&listen_addr, "LISTEN_ADDR")?,
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            max_body_bytes: parse_or(
                var("MAX_BODY_BYTES"),
                "MAX_BODY_BYTES",
                DEFAULT_MAX_BODY_BYTES,
            )?,
            list_mode: var("SLIDE_LIST_MODE")
                .map(|value| value.parse::<ListMode>())
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

fn parse_or<T>(value: Option<String>, name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(value) => parse_var(&value, name),
        None => Ok(default),
    }
}

fn parse_var<T>(value: &str, name: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

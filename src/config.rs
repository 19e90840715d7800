//! Runtime configuration read from the environment (and `.env` via dotenv).

use std::error::Error;
use std::path::PathBuf;

/// Default location of the roles file.
pub const DEFAULT_ROLES_FILE: &str = "roles.json";
/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

pub const ENV_ROLES_FILE: &str = "NETCALC_ROLES_FILE";
pub const ENV_LOG_CONFIG: &str = "NETCALC_LOG_CONFIG";
pub const ENV_USER_ID: &str = "NETCALC_USER_ID";
pub const ENV_CREATORS: &str = "NETCALC_CREATORS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file holding admins and banned users.
    pub roles_file: PathBuf,
    /// log4rs YAML configuration.
    pub log_config: PathBuf,
    /// Sender id used for lines typed on the console.
    pub user_id: i64,
    /// Seed admins for a new roles file.
    pub creators: Vec<i64>,
}

impl Config {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let roles_file = lookup(ENV_ROLES_FILE).unwrap_or_else(|| DEFAULT_ROLES_FILE.to_string());
        let log_config = lookup(ENV_LOG_CONFIG).unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string());

        let user_id = match lookup(ENV_USER_ID) {
            Some(value) => parse_id(ENV_USER_ID, &value)?,
            None => 0,
        };

        let creators = match lookup(ENV_CREATORS) {
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| parse_id(ENV_CREATORS, s))
                .collect::<Result<Vec<i64>, Box<dyn Error>>>()?,
            None => vec![user_id],
        };

        Ok(Config {
            roles_file: PathBuf::from(roles_file),
            log_config: PathBuf::from(log_config),
            user_id,
            creators,
        })
    }
}

fn parse_id(key: &str, value: &str) -> Result<i64, Box<dyn Error>> {
    value
        .trim()
        .parse()
        .map_err(|e| format!("Invalid {key}='{value}': {e}").into())
}

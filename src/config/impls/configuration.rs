use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::str::FromStr;
use regex::Regex;
use crate::common::common::log_level_filter;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracker_config::TrackerConfig;

pub const ENV_PREFIX: &str = "TRACKER_";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig::default(),
            sentry_config: SentryConfig::default(),
            http_server: vec![HttpTrackersConfig::default()],
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config)?;
        Self::save_file(path, config_toml)
    }

    /// Loads `path`, applies `TRACKER_*` environment overrides and validates the result.
    ///
    /// When the file is missing or corrupt and `create` is set, a default file is
    /// written and the defaults are used.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let mut config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(error);
                }

                eprintln!("Creating config file..");
                let config = Configuration::init();
                if let Err(error) = Configuration::save_from_config(&config, path) {
                    eprintln!("{path} file could not be created, check permissions...");
                    return Err(error);
                }
                eprintln!("Created {path} with default values, continuing with defaults.");
                config
            }
        };

        config.apply_env_overrides()?;

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigurationError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides resolved by `lookup`, which receives the full variable name
    /// (for example `TRACKER_SHARDS`).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigurationError>
    where
        F: Fn(&str) -> Option<String>
    {
        let var = |suffix: &str| lookup(&format!("{ENV_PREFIX}{suffix}"));

        if let Some(value) = var("LOG_LEVEL") {
            self.log_level = value;
        }
        if let Some(value) = var("TRACKER_ID") {
            self.tracker_config.tracker_id = value;
        }
        if let Some(value) = var("REQUEST_INTERVAL") {
            self.tracker_config.request_interval = parse_override("REQUEST_INTERVAL", &value)?;
        }
        if let Some(value) = var("REQUEST_INTERVAL_MINIMUM") {
            self.tracker_config.request_interval_minimum = parse_override("REQUEST_INTERVAL_MINIMUM", &value)?;
        }
        if let Some(value) = var("PEERS_TIMEOUT") {
            self.tracker_config.peers_timeout = parse_override("PEERS_TIMEOUT", &value)?;
        }
        if let Some(value) = var("PEERS_CLEANUP_INTERVAL") {
            self.tracker_config.peers_cleanup_interval = parse_override("PEERS_CLEANUP_INTERVAL", &value)?;
        }
        if let Some(value) = var("SHARDS") {
            self.tracker_config.shards = parse_override("SHARDS", &value)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if log_level_filter(&self.log_level).is_none() {
            return Err(invalid(format!("unknown log level '{}'", self.log_level)));
        }
        if self.log_console_interval == 0 {
            return Err(invalid("log_console_interval must be at least 1"));
        }

        let tracker_config = &self.tracker_config;
        if tracker_config.shards == 0 {
            return Err(invalid("tracker_config.shards must be at least 1"));
        }
        if tracker_config.request_interval == 0 {
            return Err(invalid("tracker_config.request_interval must be at least 1"));
        }
        if tracker_config.request_interval_minimum > tracker_config.request_interval {
            return Err(invalid("tracker_config.request_interval_minimum exceeds request_interval"));
        }
        if tracker_config.peers_timeout == 0 {
            return Err(invalid("tracker_config.peers_timeout must be at least 1"));
        }
        if tracker_config.peers_cleanup_interval == 0 {
            return Err(invalid("tracker_config.peers_cleanup_interval must be at least 1"));
        }
        if tracker_config.numwant_max == 0 {
            return Err(invalid("tracker_config.numwant_max must be at least 1"));
        }
        Self::validate_value("[tracker_config] tracker_id", &tracker_config.tracker_id, r"^[\x21-\x7e]{0,64}$")?;

        for http_server in self.http_server.iter().filter(|server| server.enabled) {
            if SocketAddr::from_str(&http_server.bind_address).is_err() {
                return Err(invalid(format!("[http_server] unparseable bind_address '{}'", http_server.bind_address)));
            }
            Self::validate_value("[http_server] real_ip", &http_server.real_ip, r"^[A-Za-z0-9-]*$")?;
            if http_server.threads == 0 {
                return Err(invalid(format!("[http_server] {} needs at least one thread", http_server.bind_address)));
            }
            if http_server.ssl && (http_server.ssl_key.is_empty() || http_server.ssl_cert.is_empty()) {
                return Err(invalid(format!("[http_server] {} has ssl enabled without ssl_key/ssl_cert", http_server.bind_address)));
            }
        }

        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex)
            .map_err(|error| invalid(format!("{name}: bad pattern: {error}")))?;
        if !regex_check.is_match(value) {
            return Err(invalid(format!("{name}: \"{value}\" does not match \"{regex_check}\"")));
        }
        Ok(())
    }
}

fn parse_override<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigurationError> {
    value.trim().parse::<T>()
        .map_err(|_| invalid(format!("{ENV_PREFIX}{name}: cannot parse '{value}'")))
}

fn invalid(message: impl Into<String>) -> ConfigurationError {
    ConfigurationError::ValidationError(message.into())
}

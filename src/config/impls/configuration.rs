use std::fs::File;
use std::io::Write;
use std::time::Duration;
use log::{info, warn};
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::data_config::DataConfig;
use crate::config::structs::player_filter_config::PlayerFilterConfig;
use crate::config::structs::query_config::QueryConfig;
use crate::config::structs::share_config::ShareConfig;

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            query: QueryConfig::default(),
            share: ShareConfig::default(),
            player_filter: PlayerFilterConfig::default(),
            data: DataConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_to_file(&self, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(self).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads and validates `path`. When the file is missing or corrupt and
    /// `create` is set, a default file is written and an error is still
    /// returned so the operator can review it first.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create config file automatically"));
                }
                eprintln!("Creating config file..");

                return match Configuration::init().save_to_file(path) {
                    Ok(_) => {
                        eprintln!("Please edit {path}, exiting now...");
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        match config.validate() {
            Ok(_) => Ok(config),
            Err(e) => {
                eprintln!("[VALIDATE CONFIG] {e}");
                Err(CustomError::new(&e.to_string()))
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(self.log_level.as_str()).is_none() {
            return Err(ConfigurationError::ValidationError(format!("unknown log level '{}'", self.log_level)));
        }
        if self.query.top_list_max_size == 0 {
            return Err(ConfigurationError::ValidationError(String::from("query.top_list_max_size must be at least 1")));
        }
        if self.query.max_workers == 0 {
            return Err(ConfigurationError::ValidationError(String::from("query.max_workers must be at least 1")));
        }
        if self.query.scan_timeout_ms == 0 {
            return Err(ConfigurationError::ValidationError(String::from("query.scan_timeout_ms must be at least 1")));
        }
        if !(6..=32).contains(&self.share.code_length) {
            return Err(ConfigurationError::ValidationError(format!("share.code_length must be between 6 and 32, got {}", self.share.code_length)));
        }
        if self.share.max_entries == 0 {
            return Err(ConfigurationError::ValidationError(String::from("share.max_entries must be at least 1")));
        }
        if self.share.cleanup_interval == 0 {
            warn!("[VALIDATE] share.cleanup_interval is 0, expired share codes are only evicted on access");
        }
        Self::validate_value("share.permission", &self.share.permission, r"^[a-z0-9_\-]+(\.[a-z0-9_\-]+)*$")?;
        info!("[VALIDATE] Configuration is valid");
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex).map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!("Error checking {name} [:] Value: \"{value}\" [:] Regex: \"{regex_check}\"")));
        }
        Ok(())
    }

    pub fn scan_timeout(&self) -> Duration {
        Duration::from_millis(self.query.scan_timeout_ms)
    }

    pub fn share_cooldown(&self) -> Duration {
        Duration::from_secs(self.share.cooldown)
    }

    pub fn share_ttl(&self) -> Duration {
        Duration::from_secs(self.share.ttl)
    }
}

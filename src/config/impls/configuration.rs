use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::time::Duration;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::node_config::NodeConfig;
use crate::config::structs::storage_config::StorageConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::content::content::DEFAULT_HASH_WINDOW;
use crate::pieces::pieces::DEFAULT_CHUNK_SIZE;
use crate::storage::enums::storage_engine::StorageEngine;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker: TrackerConfig {
                bind_address: String::from("0.0.0.0:2901"),
                max_connections: 256,
                request_timeout: 10,
                max_request_size: 4 * 1024 * 1024,
            },
            storage: StorageConfig {
                engine: StorageEngine::filesystem,
                path: String::from("pieces"),
            },
            node: NodeConfig {
                tracker_address: String::from("127.0.0.1:2901"),
                chunk_size: DEFAULT_CHUNK_SIZE as u64,
                hash_window: DEFAULT_HASH_WINDOW as u64,
                request_timeout: 10,
                storage_path: String::from("node_pieces"),
                max_file_size: 1024 * 1024 * 1024,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => file.write_all(data.as_ref()).map_err(ConfigurationError::IOError),
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        toml::to_string(self).map_err(ConfigurationError::SerializeError)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                let config_toml = Configuration::init().to_toml()
                    .map_err(|e| CustomError::new(&e.to_string()))?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start again, exiting now...");
                        Err(CustomError::new(&format!("created {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|e| {
            eprintln!("{e}");
            CustomError::new(&e.to_string())
        })?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!("Unknown log level: \"{}\"", self.log_level)));
        }
        Self::validate_address("tracker.bind_address", &self.tracker.bind_address)?;
        Self::validate_address("node.tracker_address", &self.node.tracker_address)?;

        let check_map = [
            ("tracker.max_connections", self.tracker.max_connections),
            ("tracker.request_timeout", self.tracker.request_timeout),
            ("tracker.max_request_size", self.tracker.max_request_size),
            ("node.chunk_size", self.node.chunk_size),
            ("node.hash_window", self.node.hash_window),
            ("node.request_timeout", self.node.request_timeout),
            ("node.max_file_size", self.node.max_file_size),
        ];
        for (name, value) in check_map {
            if value == 0 {
                return Err(ConfigurationError::ValidationError(format!("{name} must be greater than zero")));
            }
        }

        if self.storage.engine == StorageEngine::filesystem && self.storage.path.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("storage.path must be set for the filesystem engine")));
        }
        if self.node.storage_path.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("node.storage_path must be set")));
        }
        Ok(())
    }

    fn validate_address(name: &str, value: &str) -> Result<(), ConfigurationError> {
        value.parse::<SocketAddr>().map(|_| ()).map_err(|_| {
            ConfigurationError::ValidationError(format!("{name} is not a socket address: \"{value}\""))
        })
    }
}

impl TrackerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl NodeConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Piece count of the largest acceptable file.
    pub fn max_pieces(&self) -> u64 {
        self.max_file_size.div_ceil(self.chunk_size.max(1))
    }
}

#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;
        use crate::storage::enums::storage_engine::StorageEngine;

        #[test]
        fn test_default_configuration_is_valid() {
            let config = Configuration::init();
            assert!(config.validate().is_ok());
            assert_eq!(config.node.chunk_size, 1024);
            assert_eq!(config.tracker.bind_address, "0.0.0.0:2901");
            assert_eq!(config.storage.engine, StorageEngine::filesystem);
        }

        #[test]
        fn test_toml_round_trip() {
            let config = Configuration::init();
            let serialized = config.to_toml().unwrap();
            let parsed = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(parsed, config);
        }

        #[test]
        fn test_parse_custom_sections() {
            let toml = r#"
                log_level = "debug"
                log_console_interval = 5

                [tracker]
                bind_address = "127.0.0.1:7000"
                max_connections = 8
                request_timeout = 3
                max_request_size = 65536

                [storage]
                engine = "memory"
                path = ""

                [node]
                tracker_address = "127.0.0.1:7000"
                chunk_size = 4096
                hash_window = 512
                request_timeout = 2
                storage_path = "local"
                max_file_size = 1048576
            "#;
            let config = Configuration::load(toml.as_bytes()).unwrap();
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.tracker.max_connections, 8);
            assert_eq!(config.storage.engine, StorageEngine::memory);
            assert_eq!(config.node.chunk_size, 4096);
            assert_eq!(config.node.max_pieces(), 256);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_max_pieces_rounds_up() {
            let mut config = Configuration::init();
            config.node.chunk_size = 1024;
            config.node.max_file_size = 2500;
            assert_eq!(config.node.max_pieces(), 3);
            config.node.max_file_size = 0;
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_missing_section_fails_to_parse() {
            let toml = r#"
                log_level = "info"
                log_console_interval = 60
            "#;
            assert!(Configuration::load(toml.as_bytes()).is_err());
        }

        #[test]
        fn test_zero_chunk_size_rejected() {
            let mut config = Configuration::init();
            config.node.chunk_size = 0;
            match config.validate() {
                Err(ConfigurationError::ValidationError(message)) => {
                    assert!(message.contains("node.chunk_size"));
                }
                other => panic!("expected validation error, got {:?}", other),
            }
        }

        #[test]
        fn test_bad_address_rejected() {
            let mut config = Configuration::init();
            config.tracker.bind_address = String::from("localhost");
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_unknown_log_level_rejected() {
            let mut config = Configuration::init();
            config.log_level = String::from("loud");
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_filesystem_engine_requires_path() {
            let mut config = Configuration::init();
            config.storage.path = String::new();
            assert!(config.validate().is_err());
            config.storage.engine = StorageEngine::memory;
            assert!(config.validate().is_ok());
        }
    }

    mod configuration_file_tests {
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_load_from_missing_file_without_create() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();
            assert!(Configuration::load_from_file(path, false).is_err());
            assert!(!std::path::Path::new(path).exists());
        }

        #[test]
        fn test_load_from_missing_file_with_create() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();
            assert!(Configuration::load_from_file(path, true).is_err());
            let created = Configuration::load_file(path).unwrap();
            assert_eq!(created, Configuration::init());
            assert!(Configuration::load_from_file(path, false).is_ok());
        }
    }

    mod configuration_error_tests {
        use crate::config::enums::configuration_error::ConfigurationError;

        #[test]
        fn test_validation_error_display() {
            let error = ConfigurationError::ValidationError(String::from("node.chunk_size must be greater than zero"));
            assert_eq!(error.to_string(), "[VALIDATE CONFIG] node.chunk_size must be greater than zero");
        }

        #[test]
        fn test_io_error_display() {
            let error = ConfigurationError::IOError(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
            assert_eq!(error.to_string(), "missing");
        }
    }
}

#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use std::collections::HashMap;
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_default_configuration_is_valid() {
            let config = Configuration::init();
            assert!(config.validate().is_ok());
            assert_eq!(config.tracker_config.peers_cleanup_interval, 300);
            assert_eq!(config.tracker_config.numwant_default, 30);
        }

        #[test]
        fn test_load_partial_toml_uses_defaults() {
            let data = br#"
                log_level = "debug"

                [tracker_config]
                shards = 16
                tracker_id = "oat"
            "#;
            let config = Configuration::load(data).unwrap();

            assert_eq!(config.log_level, "debug");
            assert_eq!(config.tracker_config.shards, 16);
            assert_eq!(config.tracker_config.tracker_id, "oat");
            assert_eq!(config.tracker_config.request_interval, 1800);
            assert_eq!(config.http_server.len(), 1);
        }

        #[test]
        fn test_load_rejects_malformed_toml() {
            assert!(Configuration::load(b"tracker_config = [").is_err());
        }

        #[test]
        fn test_save_and_load_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();

            let mut config = Configuration::init();
            config.tracker_config.shards = 8;
            Configuration::save_from_config(&config, path).unwrap();

            let loaded = Configuration::load_file(path).unwrap();
            assert_eq!(loaded.tracker_config, config.tracker_config);
            assert_eq!(loaded.http_server, config.http_server);
        }

        #[test]
        fn test_load_from_file_missing_without_create() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("absent.toml");
            let result = Configuration::load_from_file(path.to_str().unwrap(), false);
            assert!(matches!(result, Err(ConfigurationError::IOError(_))));
        }

        #[test]
        fn test_load_from_file_creates_default() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("created.toml");
            let config = Configuration::load_from_file(path.to_str().unwrap(), true).unwrap();

            assert!(path.exists());
            assert_eq!(config.tracker_config.shards, 256);
        }

        #[test]
        fn test_overrides_are_applied() {
            let vars: HashMap<&str, &str> = HashMap::from([
                ("TRACKER_SHARDS", "4"),
                ("TRACKER_PEERS_TIMEOUT", "60"),
                ("TRACKER_TRACKER_ID", "room-tracker"),
                ("TRACKER_LOG_LEVEL", "warn"),
            ]);
            let mut config = Configuration::init();
            config.apply_overrides(|name| vars.get(name).map(|value| value.to_string())).unwrap();

            assert_eq!(config.tracker_config.shards, 4);
            assert_eq!(config.tracker_config.peers_timeout, 60);
            assert_eq!(config.tracker_config.tracker_id, "room-tracker");
            assert_eq!(config.log_level, "warn");
        }

        #[test]
        fn test_unparseable_override_is_rejected() {
            let mut config = Configuration::init();
            let result = config.apply_overrides(|name| (name == "TRACKER_SHARDS").then(|| String::from("many")));
            assert!(matches!(result, Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_validate_rejects_zero_shards() {
            let mut config = Configuration::init();
            config.tracker_config.shards = 0;
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_rejects_unknown_log_level() {
            let mut config = Configuration::init();
            config.log_level = String::from("loud");
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_rejects_minimum_above_interval() {
            let mut config = Configuration::init();
            config.tracker_config.request_interval = 60;
            config.tracker_config.request_interval_minimum = 120;
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_rejects_tracker_id_with_spaces() {
            let mut config = Configuration::init();
            config.tracker_config.tracker_id = String::from("two words");
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_rejects_bad_bind_address() {
            let mut config = Configuration::init();
            config.http_server[0].bind_address = String::from("localhost");
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_ignores_disabled_servers() {
            let mut config = Configuration::init();
            config.http_server[0].enabled = false;
            config.http_server[0].bind_address = String::from("nowhere");
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_validate_rejects_ssl_without_files() {
            let mut config = Configuration::init();
            config.http_server[0].ssl = true;
            assert!(config.validate().is_err());
        }
    }

    mod configuration_error_tests {
        use crate::config::enums::configuration_error::ConfigurationError;

        #[test]
        fn test_validation_error_display() {
            let error = ConfigurationError::ValidationError(String::from("shards must be at least 1"));
            assert_eq!(error.to_string(), "invalid configuration: shards must be at least 1");
        }

        #[test]
        fn test_io_error_conversion() {
            let error: ConfigurationError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
            assert!(matches!(error, ConfigurationError::IOError(_)));
        }
    }
}

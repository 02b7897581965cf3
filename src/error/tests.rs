//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod fantasy_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = FantasyError::from(json_error);

        match error {
            FantasyError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = FantasyError::from(io_error);

        match error {
            FantasyError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let error = FantasyError::from(parse_error);

        match error {
            FantasyError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_data_file_error_names_the_file() {
        let source = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        let error = FantasyError::DataFile {
            path: "/tmp/league/drivers.json".to_string(),
            source,
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Failed to parse data file"));
        assert!(error_string.contains("drivers.json"));
    }

    #[test]
    fn test_missing_data_dir_error() {
        let error = FantasyError::MissingDataDir {
            env_var: "F1_FANTASY_DATA_DIR".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Data directory not provided"));
        assert!(error_string.contains("F1_FANTASY_DATA_DIR"));
    }

    #[test]
    fn test_invalid_session_error() {
        let error = FantasyError::InvalidSession {
            session: "practice".to_string(),
        };

        assert_eq!(error.to_string(), "Invalid session: practice");
    }

    #[test]
    fn test_driver_not_found_error() {
        let error = FantasyError::DriverNotFound {
            query: "Senna".to_string(),
        };

        assert_eq!(error.to_string(), "Driver not found: Senna");
    }

    #[test]
    fn test_ambiguous_driver_error() {
        let error = FantasyError::AmbiguousDriver {
            query: "an".to_string(),
            matches: "Lando Norris, Alexander Albon".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("ambiguous"));
        assert!(error_string.contains("Lando Norris"));
    }

    #[test]
    fn test_error_debug_format() {
        let error = FantasyError::DriverNotFound {
            query: "77".to_string(),
        };
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("DriverNotFound"));
    }
}

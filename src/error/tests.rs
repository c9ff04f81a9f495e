//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod stats_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let stats_error = StatsError::from(json_error);

        match stats_error {
            StatsError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stats_error = StatsError::from(io_error);

        match stats_error {
            StatsError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_database_error_conversion() {
        let db_error = rusqlite::Error::QueryReturnedNoRows;
        let stats_error = StatsError::from(db_error);

        match stats_error {
            StatsError::Database(_) => (),
            _ => panic!("Expected Database error variant"),
        }
    }

    #[test]
    fn test_invalid_parameter_message() {
        let error = StatsError::invalid("window size must be at least 1");
        assert_eq!(
            error.to_string(),
            "Invalid parameter: window size must be at least 1"
        );
        assert!(error.is_invalid_parameter());
    }

    #[test]
    fn test_unknown_stat_is_invalid_parameter() {
        let error = StatsError::UnknownStat {
            key: "dunks".to_string(),
        };
        assert!(error.to_string().contains("dunks"));
        assert!(error.is_invalid_parameter());
    }

    #[test]
    fn test_structural_error() {
        let error = StatsError::structural("expected an array of rows");
        assert!(error.to_string().contains("expected an array of rows"));
        assert!(!error.is_invalid_parameter());
    }

    #[test]
    fn test_missing_database_path_error() {
        let error = StatsError::MissingDatabasePath {
            env_var: "HOOPS_STATS_DB".to_string(),
        };
        assert!(error.to_string().contains("HOOPS_STATS_DB"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<u32> {
            Ok(40)
        }

        fn returns_err() -> Result<u32> {
            Err(StatsError::invalid("nope"))
        }

        assert_eq!(returns_ok().unwrap(), 40);
        assert!(returns_err().is_err());
    }
}

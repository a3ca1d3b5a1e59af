//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use lifegrid::LifeError;
    use lifegrid::io::error::{Axis, invalid_parameter, malformed_grid};
    use std::error::Error;

    // Tests error source chaining for wrapped I/O failures
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = LifeError::FileSystem {
            path: "/tmp/glider.cells".into(),
            operation: "read pattern",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read pattern"));
        assert!(message.contains("/tmp/glider.cells"));
    }

    // Tests that coordinate errors name the axis and value
    #[test]
    fn test_invalid_coordinate_message() {
        let row = LifeError::InvalidCoordinate {
            axis: Axis::Row,
            value: -1,
        };
        let col = LifeError::InvalidCoordinate {
            axis: Axis::Column,
            value: -3,
        };

        assert_eq!(row.to_string(), "Row index cannot be negative (got -1)");
        assert_eq!(col.to_string(), "Column index cannot be negative (got -3)");
        assert!(row.source().is_none());
    }

    // Tests parse error formatting with the line number
    #[test]
    fn test_pattern_parse_message() {
        let error = LifeError::PatternParse {
            line: 4,
            reason: "unexpected character 'x'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid pattern at line 4: unexpected character 'x'"
        );
    }

    // Tests helper constructors
    #[test]
    fn test_helper_constructors() {
        let error = invalid_parameter("density", &1.5, &"must be within [0, 1]");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'density' = '1.5': must be within [0, 1]"
        );

        let error = malformed_grid(&"grid has no rows");
        assert!(matches!(
            error,
            LifeError::MalformedGrid { ref reason } if reason == "grid has no rows"
        ));
    }

    // Tests conversion from std::io::Error
    #[test]
    fn test_from_io_error() {
        let error: LifeError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(
            error,
            LifeError::FileSystem {
                operation: "unknown",
                ..
            }
        ));
    }
}

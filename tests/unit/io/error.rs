//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::Path;
    use tilestitch::StitchError;
    use tilestitch::io::error::{WithPath, computation_error, invalid_input};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = StitchError::FileSystem {
            path: "/tmp/puzzle.txt".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(invalid_input(&"bad").source().is_none());
    }

    // Tests parse errors name the offending line
    // Verified by omitting the line number from the message
    #[test]
    fn test_parse_error_message() {
        let error = StitchError::Parse {
            line: 12,
            reason: "unexpected character 'x'".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("line 12"));
        assert!(message.contains("'x'"));
    }

    // Tests assembly failures are distinguished from other errors
    // Verified by including PatternNotFound in assembly failures
    #[test]
    fn test_is_assembly_failure() {
        assert!(StitchError::NoCornerTile { tile_count: 2 }.is_assembly_failure());
        assert!(StitchError::UnfilledCell { row: 0, col: 1 }.is_assembly_failure());
        assert!(!StitchError::PatternNotFound { roughness: 3 }.is_assembly_failure());
        assert!(!computation_error("corner product", &"overflow").is_assembly_failure());
    }

    // Tests assembly failure messages carry their context
    // Verified by dropping the cell coordinates from the message
    #[test]
    fn test_assembly_messages() {
        let unfilled = StitchError::UnfilledCell { row: 2, col: 3 }.to_string();
        assert!(unfilled.contains("(2, 3)"));
        let corner = StitchError::NoCornerTile { tile_count: 9 }.to_string();
        assert!(corner.contains('9'));
        let missing = StitchError::PatternNotFound { roughness: 42 }.to_string();
        assert!(missing.contains("42"));
    }

    // Tests bare I/O errors pick up the path they concern
    // Verified by keeping the placeholder path
    #[test]
    fn test_with_path() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let error = result
            .with_path(Path::new("puzzles/a.txt"), "read puzzle")
            .expect_err("Error should be kept");
        match error {
            StitchError::FileSystem {
                path, operation, ..
            } => {
                assert_eq!(path, Path::new("puzzles/a.txt"));
                assert_eq!(operation, "read puzzle");
            }
            other => panic!("Unexpected error {other}"),
        }
    }

    // Tests non-I/O errors pass through with_path unchanged
    // Verified by rewriting every error as a file system error
    #[test]
    fn test_with_path_passthrough() {
        let result: Result<(), StitchError> = Err(invalid_input(&"no tiles"));
        let error = result
            .with_path(Path::new("x.txt"), "read puzzle")
            .expect_err("Error should be kept");
        assert!(matches!(error, StitchError::InvalidInput { .. }));
    }
}

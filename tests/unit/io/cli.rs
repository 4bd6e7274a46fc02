//! Tests for argument parsing and batch solving of puzzle files

#[cfg(test)]
mod tests {
    use clap::Parser;
    use log::LevelFilter;
    use ndarray::Array2;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use tilestitch::StitchError;
    use tilestitch::algorithm::scanner::Stencil;
    use tilestitch::io::cli::{Cli, FileProcessor, FileReport};
    use tilestitch::io::parse::format_tiles;
    use tilestitch::spatial::synthesis::SyntheticPuzzle;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("tilestitch").chain(args.iter().copied()))
    }

    fn run(args: &[&str]) -> tilestitch::Result<Vec<FileReport>> {
        FileProcessor::new(cli(args)).process()
    }

    fn path_arg(path: &Path) -> &str {
        path.to_str().expect("Temp paths are UTF-8")
    }

    // Writes a scrambled 3x3 puzzle with one upright and one flipped monster
    fn write_monster_puzzle(dir: &Path, name: &str, seed: u64) -> PathBuf {
        let mut image = Array2::from_elem((24, 24), false);
        for &[row, col] in Stencil::sea_monster().required() {
            image[(2 + row, 2 + col)] = true;
            image[(12 - row, 2 + col)] = true;
        }
        let puzzle = SyntheticPuzzle::from_image(&image, 10, true, seed).expect("Failed to generate");
        let path = dir.join(name);
        fs::write(&path, format_tiles(&puzzle.tiles)).expect("Failed to write puzzle");
        path
    }

    // Tests verbosity flags map onto log levels
    // Verified by starting the default level at info
    #[test]
    fn test_log_levels() {
        assert_eq!(cli(&["p.txt"]).log_level(), LevelFilter::Warn);
        assert_eq!(cli(&["p.txt", "-v"]).log_level(), LevelFilter::Info);
        assert_eq!(cli(&["p.txt", "-vv"]).log_level(), LevelFilter::Debug);
        assert_eq!(cli(&["p.txt", "-vvvv"]).log_level(), LevelFilter::Trace);
    }

    // Tests quiet mode configuration
    // Verified by ignoring the quiet flag in should_show_progress
    #[test]
    fn test_quiet_mode() {
        let quiet = cli(&["p.txt", "--quiet"]);
        assert!(quiet.quiet);
        assert!(!quiet.should_show_progress());
        assert!(cli(&["p.txt"]).should_show_progress());
    }

    // Tests directories are solved in sorted order, skipping other files
    // Verified by removing the sort after reading the directory
    #[test]
    fn test_process_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        write_monster_puzzle(temp_dir.path(), "b.txt", 5);
        write_monster_puzzle(temp_dir.path(), "a.txt", 9);
        fs::write(temp_dir.path().join("notes.md"), "not a puzzle").expect("Failed to write");

        let reports = run(&[path_arg(temp_dir.path()), "-q"]).expect("Batch should succeed");
        let names: Vec<_> = reports
            .iter()
            .map(|report| report.path.file_name().unwrap_or_default().to_os_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert!(reports.iter().all(|report| report.roughness == 15));
        assert!(reports.iter().all(|report| report.pattern_found));
        assert!(reports.iter().all(|report| report.rendered.is_none()));
    }

    // Tests missing targets and non-puzzle files are rejected
    // Verified by returning an empty batch for unknown targets
    #[test]
    fn test_invalid_targets() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("missing.txt");
        assert!(matches!(
            run(&[path_arg(&missing), "-q"]),
            Err(StitchError::InvalidInput { .. })
        ));

        let image = temp_dir.path().join("photo.png");
        fs::write(&image, "not a puzzle").expect("Failed to write");
        assert!(matches!(
            run(&[path_arg(&image), "-q"]),
            Err(StitchError::InvalidInput { .. })
        ));
    }

    // Tests an empty directory yields no reports
    // Verified by treating an empty batch as an error
    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let reports = run(&[path_arg(temp_dir.path())]).expect("Empty batch should succeed");
        assert!(reports.is_empty());
    }

    // Tests export writes the composite PNG next to the input
    // Verified by changing the output suffix
    #[test]
    fn test_export() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = write_monster_puzzle(temp_dir.path(), "sea.txt", 3);

        let reports = run(&[path_arg(&input), "-q", "--export"]).expect("Solve should succeed");
        let expected = temp_dir.path().join("sea_composite.png");
        assert_eq!(reports[0].exported.as_deref(), Some(expected.as_path()));
        assert!(expected.exists());
        assert_eq!(FileProcessor::get_output_path(&input), expected);
    }

    // Tests printing marks covered pixels
    // Verified by rendering the composite without match highlights
    #[test]
    fn test_print() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = write_monster_puzzle(temp_dir.path(), "sea.txt", 8);

        let reports = run(&[path_arg(&input), "-q", "-p"]).expect("Solve should succeed");
        let rendered = reports[0].rendered.as_deref().expect("Composite should be rendered");
        assert_eq!(rendered.matches('O').count(), 15);
        assert_eq!(rendered.matches('#').count(), 15);
        assert_eq!(rendered.lines().count(), 24);
    }

    // Tests strict mode turns a missing stencil into an error
    // Verified by ignoring the strict flag
    #[test]
    fn test_strict_mode() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let puzzle = SyntheticPuzzle::generate(2, 6, 14).expect("Failed to generate");
        let input = temp_dir.path().join("plain.txt");
        fs::write(&input, format_tiles(&puzzle.tiles)).expect("Failed to write puzzle");

        let lenient = run(&[path_arg(&input), "-q"]).expect("Solve should succeed");
        assert!(!lenient[0].pattern_found);

        assert!(matches!(
            run(&[path_arg(&input), "-q", "--strict"]),
            Err(StitchError::PatternNotFound { .. })
        ));
    }

    // Tests a custom stencil file replaces the sea monster
    // Verified by always scanning for the built-in stencil
    #[test]
    fn test_custom_stencil() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = write_monster_puzzle(temp_dir.path(), "sea.txt", 2);
        let stencil = temp_dir.path().join("pair.stencil");
        fs::write(&stencil, "##\n").expect("Failed to write stencil");

        let reports =
            run(&[path_arg(&input), "-q", "-s", path_arg(&stencil)]).expect("Solve should succeed");
        assert!(reports[0].pattern_found);
        assert!(reports[0].roughness < 30);
    }

    // Tests the report line format
    // Verified by printing the roughness before the corner product
    #[test]
    fn test_report_display() {
        let report = FileReport {
            path: PathBuf::from("day20.txt"),
            corner_product: 189,
            roughness: 15,
            pattern_found: true,
            rendered: None,
            exported: None,
        };
        assert_eq!(
            report.to_string(),
            "day20.txt: corner product 189, roughness 15"
        );
    }
}

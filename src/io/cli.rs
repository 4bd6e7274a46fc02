//! Command-line interface for solving puzzle files in batch

use crate::algorithm::pipeline::{Solution, solve};
use crate::algorithm::scanner::{ScanOutcome, Stencil};
use crate::io::configuration::{EMPTY_PIXEL, FILLED_PIXEL, INPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{Result, WithPath, invalid_input};
use crate::io::image::export_scan_as_png;
use crate::io::parse::{load_stencil, load_tiles};
use crate::io::progress::ProgressManager;
use crate::spatial::bitmap::render;
use clap::Parser;
use log::{LevelFilter, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

// Marks stencil-covered pixels in printed composites
const COVERED_PIXEL: char = 'O';

#[derive(Parser)]
#[command(name = "tilestitch")]
#[command(
    author,
    version,
    about = "Reassemble edge-matched tiles and measure the roughness around a stencil"
)]
/// Command-line arguments for the puzzle solver
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Puzzle text file or directory of puzzle files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Stencil file to search for instead of the sea monster
    #[arg(short, long, value_name = "FILE")]
    pub stencil: Option<PathBuf>,

    /// Write `<stem>_composite.png` next to each input
    #[arg(short, long)]
    pub export: bool,

    /// Print each composite with stencil matches marked
    #[arg(short, long)]
    pub print: bool,

    /// Fail when no rotation contains the stencil
    #[arg(long)]
    pub strict: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Raise log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by the `-v` count
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Result of solving one puzzle file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Puzzle file that was solved
    pub path: PathBuf,
    /// Product of the four corner tile ids
    pub corner_product: u64,
    /// Filled pixels outside every stencil match
    pub roughness: usize,
    /// Whether any rotation held the stencil
    pub pattern_found: bool,
    /// Text rendering of the composite, when printing was requested
    pub rendered: Option<String>,
    /// Where the PNG was written, when exporting was requested
    pub exported: Option<PathBuf>,
}

impl std::fmt::Display for FileReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: corner product {}, roughness {}",
            self.path.display(),
            self.corner_product,
            self.roughness
        )
    }
}

/// Orchestrates solving of puzzle files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Solve every puzzle named by the target
    ///
    /// # Errors
    ///
    /// Returns an error if the target or stencil is invalid, or a puzzle
    /// fails to load, assemble or export. With `--strict`, a puzzle whose
    /// composite holds no stencil match is an error too.
    pub fn process(&mut self) -> Result<Vec<FileReport>> {
        let files = self.collect_files()?;
        let stencil = match self.cli.stencil {
            Some(ref path) => load_stencil(path)?,
            None => Stencil::sea_monster(),
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut reports = Vec::with_capacity(files.len());
        for file in &files {
            reports.push(self.process_file(file, &stencil)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if has_input_extension(target) {
                Ok(vec![target.clone()])
            } else {
                Err(invalid_input(&format!(
                    "target file '{}' must have a .{INPUT_EXTENSION} extension",
                    target.display()
                )))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target, "read directory")? {
                let path = entry.with_path(target, "read directory")?.path();
                if path.is_file() && has_input_extension(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_input(&format!(
                "target '{}' must be a puzzle file or directory",
                target.display()
            )))
        }
    }

    fn process_file(&self, input_path: &Path, stencil: &Stencil) -> Result<FileReport> {
        let start_time = Instant::now();
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
            pm.set_stage("parsing");
        }
        let tiles = load_tiles(input_path)?;

        if let Some(ref pm) = self.progress_manager {
            pm.set_stage("solving");
        }
        let solution = solve(&tiles, stencil)?;

        if !solution.scan.is_found() {
            warn!(
                "{}: stencil not found in any rotation",
                input_path.display()
            );
            if self.cli.strict {
                solution.scan.clone().into_result()?;
            }
        }

        let exported = if self.cli.export {
            if let Some(ref pm) = self.progress_manager {
                pm.set_stage("exporting");
            }
            let output_path = Self::get_output_path(input_path);
            export_scan_as_png(&solution.image, &solution.scan, &output_path)?;
            Some(output_path)
        } else {
            None
        };

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }
        info!(
            "{} solved in {:.2?}",
            input_path.display(),
            start_time.elapsed()
        );

        Ok(FileReport {
            path: input_path.to_path_buf(),
            corner_product: solution.corner_product,
            roughness: solution.roughness(),
            pattern_found: solution.scan.is_found(),
            rendered: self.cli.print.then(|| render_solution(&solution)),
            exported,
        })
    }

    /// Path of the PNG exported for `input_path`
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn has_input_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
}

/// Render a composite as text, in the rotation the stencil was found in
///
/// Covered pixels print as `O`. Without a match the composite prints as
/// assembled.
pub fn render_solution(solution: &Solution) -> String {
    let ScanOutcome::Found(ref matches) = solution.scan else {
        return render(&solution.image);
    };
    let mut text = String::with_capacity(matches.image.len() + matches.image.nrows());
    for (row, pixels) in matches.image.rows().into_iter().enumerate() {
        text.extend(
            pixels
                .iter()
                .enumerate()
                .map(|(col, &filled)| match (filled, matches.is_covered(row, col)) {
                    (true, true) => COVERED_PIXEL,
                    (true, false) => FILLED_PIXEL,
                    (false, _) => EMPTY_PIXEL,
                }),
        );
        text.push('\n');
    }
    text
}

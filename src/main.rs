//! CLI entry point for the tile stitching solver

use clap::Parser;
use tilestitch::io::cli::{Cli, FileProcessor};

// Reports are the program's output
#[allow(clippy::print_stdout)]
fn main() -> tilestitch::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut processor = FileProcessor::new(cli);
    for report in processor.process()? {
        println!("{report}");
        if let Some(ref text) = report.rendered {
            println!("{text}");
        }
    }
    Ok(())
}

//! CLI entry point for advancing Game of Life patterns

use clap::Parser;
use lifegrid::io::cli::{Cli, Runner};

fn main() -> lifegrid::Result<()> {
    let cli = Cli::parse();
    let runner = Runner::new(cli);
    runner.run().map(|_| ())
}

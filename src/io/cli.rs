//! Command-line driver that loads or generates a grid and advances it

use crate::algorithm::simulation::{RunSummary, Simulation};
use crate::io::configuration::{
    DEFAULT_GENERATIONS, DEFAULT_OUTPUT_EXTENSION, DEFAULT_PIXEL_SCALE, DEFAULT_SEED,
    DEFAULT_SOUP_DENSITY, DEFAULT_SOUP_SIZE, OUTPUT_SUFFIX, SOUP_STEM,
};
use crate::io::error::Result;
use crate::io::pattern::{PatternFormat, load_grid, save_grid};
use crate::io::progress::{GenerationProgress, summary_message};
use crate::io::soup::random_soup;
use crate::spatial::grid::Grid;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "lifegrid")]
#[command(
    author,
    version,
    about = "Advance Game of Life patterns through successive generations"
)]
/// Command-line arguments for the generation driver
pub struct Cli {
    /// Pattern file to evolve (.cells, .txt or .png); a random soup is used when omitted
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Maximum generations to compute
    #[arg(short, long, default_value_t = DEFAULT_GENERATIONS)]
    pub generations: usize,

    /// Random seed for soup generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Soup dimensions as ROWSxCOLS
    #[arg(long, value_name = "ROWSxCOLS", value_parser = parse_dimensions)]
    pub soup_size: Option<(usize, usize)>,

    /// Probability of each soup cell starting alive
    #[arg(short, long, default_value_t = DEFAULT_SOUP_DENSITY)]
    pub density: f64,

    /// Output file (.cells, .txt or .png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pixel edge length per cell for PNG output
    #[arg(long, default_value_t = DEFAULT_PIXEL_SCALE)]
    pub scale: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Keep running after the grid stops changing
    #[arg(long)]
    pub no_stop: bool,
}

impl Cli {
    /// Check if the run should end once the grid is stable
    pub const fn stop_when_stable(&self) -> bool {
        !self.no_stop
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Soup dimensions, falling back to the default size
    pub fn soup_dimensions(&self) -> (usize, usize) {
        self.soup_size.unwrap_or(DEFAULT_SOUP_SIZE)
    }

    /// Where the final grid is written
    ///
    /// Defaults to `<stem>_result.cells` next to the target, or
    /// `soup_result.cells` in the working directory.
    pub fn output_path(&self) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }

        let Some(target) = &self.target else {
            return PathBuf::from(format!(
                "{SOUP_STEM}{OUTPUT_SUFFIX}.{DEFAULT_OUTPUT_EXTENSION}"
            ));
        };

        let stem = target.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{OUTPUT_SUFFIX}.{DEFAULT_OUTPUT_EXTENSION}",
            stem.to_string_lossy()
        );

        if let Some(parent) = target.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Parse a `ROWSxCOLS` pair such as `64x48`
///
/// # Errors
///
/// Returns a message when the value is not two positive integers separated by `x`
pub fn parse_dimensions(value: &str) -> std::result::Result<(usize, usize), String> {
    let (rows, cols) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got '{value}'"))?;

    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| format!("'{part}' is not a positive integer"))
    };

    Ok((parse(rows)?, parse(cols)?))
}

/// Runs one simulation according to the CLI arguments
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the target pattern or generate a soup
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern cannot be loaded or the soup
    /// parameters are invalid
    pub fn initial_grid(&self) -> Result<Grid> {
        match &self.cli.target {
            Some(path) => load_grid(path),
            None => {
                let (rows, cols) = self.cli.soup_dimensions();
                random_soup(rows, cols, self.cli.density, self.cli.seed)
            }
        }
    }

    /// Run the simulation and write the final grid
    ///
    /// # Errors
    ///
    /// Returns an error if the initial grid cannot be produced, the output
    /// format is unsupported, or the result cannot be written
    // Allow print for the closing summary line
    #[allow(clippy::print_stderr)]
    pub fn run(&self) -> Result<RunSummary> {
        let start_time = Instant::now();
        let output_path = self.cli.output_path();
        // Reject unsupported output before spending time on the run
        PatternFormat::from_path(&output_path)?;

        let grid = self.initial_grid()?;
        let initial_population = grid.population();

        let progress = if self.cli.should_show_progress() {
            GenerationProgress::new(self.cli.generations)
        } else {
            GenerationProgress::hidden(self.cli.generations)
        };

        let mut simulation = Simulation::new(grid);
        let summary = simulation.run_with(
            self.cli.generations,
            self.cli.stop_when_stable(),
            |sim| progress.update(sim.generation(), sim.grid().population()),
        );
        progress.finish(&summary);

        save_grid(simulation.grid(), &output_path, self.cli.scale)?;

        if !self.cli.quiet {
            eprintln!(
                "{}: {}, starting population {initial_population}, in {:.2?}",
                output_path.display(),
                summary_message(&summary),
                start_time.elapsed()
            );
        }

        Ok(summary)
    }
}

//! Progress display for long simulation runs

use crate::algorithm::simulation::RunSummary;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static GENERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Generations: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking generation count and live population
pub struct GenerationProgress {
    bar: ProgressBar,
}

impl GenerationProgress {
    /// Create a visible progress bar for up to `max_generations` generations
    pub fn new(max_generations: usize) -> Self {
        let bar = ProgressBar::new(max_generations as u64);
        bar.set_style(GENERATION_STYLE.clone());
        Self { bar }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden(max_generations: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(max_generations as u64);
        Self { bar }
    }

    /// Report the latest generation and its population
    pub fn update(&self, generation: usize, population: usize) {
        self.bar.set_position(generation as u64);
        self.bar.set_message(format!("population {population}"));
    }

    /// Finish the bar with the outcome of the run
    ///
    /// The bar stays at the last reported generation, so early stops remain visible.
    pub fn finish(&self, summary: &RunSummary) {
        self.bar.abandon_with_message(summary_message(summary));
    }
}

/// One-line description of how a run ended
pub fn summary_message(summary: &RunSummary) -> String {
    format!(
        "{} after {} generations (population {})",
        summary.stop_reason, summary.generations, summary.population
    )
}

//! Batch progress display for multi-map runs

use crate::io::configuration::MAX_VISIBLE_MAPS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display while a batch of maps is generated
///
/// A single batch bar counts finished maps; below it a rolling window of
/// lines shows the most recent seeds and whether each one is done.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    map_lines: Vec<ProgressBar>,
    /// (`seed`, `finished`) for every started map
    map_states: Vec<(String, bool)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Maps: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static LINE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("  {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

impl ProgressManager {
    /// Create an empty progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            map_lines: Vec::new(),
            map_states: Vec::new(),
        }
    }

    /// Set up the batch bar and status lines for `map_count` maps
    pub fn initialize(&mut self, map_count: usize) {
        if map_count == 0 {
            return;
        }

        let batch_bar = ProgressBar::new(map_count as u64);
        batch_bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(self.multi_progress.add(batch_bar));

        for _ in 0..map_count.min(MAX_VISIBLE_MAPS) {
            let line = ProgressBar::new(0);
            line.set_style(LINE_STYLE.clone());
            self.map_lines.push(self.multi_progress.add(line));
        }
    }

    /// Record that generation of `seed` has started
    pub fn start_map(&mut self, seed: &str) {
        self.map_states.push((seed.to_string(), false));
        self.update_lines();
    }

    /// Mark the most recently started map as finished
    pub fn complete_map(&mut self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.map_states.last_mut() {
            state.1 = true;
        }
        self.update_lines();
    }

    /// Number of maps finished so far
    pub fn completed(&self) -> usize {
        self.map_states.iter().filter(|(_, done)| *done).count()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All maps generated");
        }
        let _ = self.multi_progress.clear();
    }

    /// Show the last few maps in the status lines
    fn update_lines(&self) {
        let start = self.map_states.len().saturating_sub(MAX_VISIBLE_MAPS);
        let visible = self.map_states.get(start..).unwrap_or(&[]);

        for (index, line) in self.map_lines.iter().enumerate() {
            match visible.get(index) {
                Some((seed, done)) => {
                    line.set_prefix(if *done { "✓" } else { "…" });
                    line.set_message(seed.clone());
                }
                None => {
                    line.set_prefix(String::new());
                    line.set_message(String::new());
                }
            }
        }
    }
}

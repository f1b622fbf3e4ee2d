//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{HumanDuration, MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static PIXEL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch synthesis
///
/// Small batches get one pixel-count bar per image; large batches add a
/// single batch bar on top and roll the per-image bars through a window of
/// the most recently active files to avoid terminal spam.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    /// Stores (`filename`, `painted`, `total_pixels`) per file
    file_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(PIXEL_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Register a file whose synthesis is starting
    pub fn start_file(&mut self, index: usize, path: &Path, total_pixels: usize) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = (display_name, 0, total_pixels);
        }
        self.update_bars();
    }

    /// Report how many pixels the file's run has painted so far
    pub fn update_painted(&mut self, index: usize, painted: usize) {
        if let Some(state) = self.file_states.get_mut(index) {
            state.1 = painted;
        }
        self.update_bars();
    }

    /// Mark a file as completed, showing its elapsed time
    pub fn complete_file(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            state.0 = format!("✓ {} ({})", state.0, HumanDuration(elapsed));
            state.1 = state.2;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All images processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Redraw the window of the most recently active files
    fn update_bars(&self) {
        let active: Vec<(&str, usize, usize)> = self
            .file_states
            .iter()
            .filter(|(name, _, _)| !name.is_empty())
            .map(|(name, painted, total)| (name.as_str(), *painted, *total))
            .collect();

        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar_index, (name, painted, total)) in visible.iter().enumerate() {
            if let Some(bar) = self.file_bars.get(bar_index) {
                bar.set_length(*total as u64);
                bar.set_position(*painted as u64);
                bar.set_prefix((*name).to_string());
                bar.set_message(format!("{painted}/{total} px"));
            }
        }

        for bar_index in visible.len()..self.file_bars.len() {
            if let Some(bar) = self.file_bars.get(bar_index) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_prefix(String::new());
                bar.set_message(String::new());
            }
        }
    }
}

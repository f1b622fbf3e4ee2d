//! Command-line interface for batch synthesis of PNG files

use crate::algorithm::rng::SeededSelector;
use crate::algorithm::walker::{PointRange, RandomWalk};
use crate::analysis::adjacency::TransitionModel;
use crate::analysis::statistics::ModelStatistics;
use crate::io::configuration::{
    DEFAULT_MAX_POINTS, DEFAULT_MIN_POINTS, DEFAULT_SEED, GIF_FRAME_DELAY_MS,
    MAX_OUTPUT_DIMENSION, OUTPUT_SUFFIX, PROGRESS_UPDATE_INTERVAL,
};
use crate::io::error::{Result, SynthesisError, invalid_parameter};
use crate::io::image::{export_canvas_as_png, load_canvas};
use crate::io::progress::ProgressManager;
use crate::spatial::Canvas;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "chainfill")]
#[command(
    author,
    version,
    about = "Regrow images from their own color adjacency statistics"
)]
/// Command-line arguments for the synthesis tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible synthesis
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Minimum number of starting points to scatter
    #[arg(long, default_value_t = DEFAULT_MIN_POINTS)]
    pub min_points: usize,

    /// Maximum number of starting points to scatter
    #[arg(long, default_value_t = DEFAULT_MAX_POINTS)]
    pub max_points: usize,

    /// Output width in pixels (defaults to the source width)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Output height in pixels (defaults to the source height)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Export the growth as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Print transition model statistics before synthesis
    #[arg(long)]
    pub stats: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch synthesis of PNG files with progress tracking
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

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, model building, synthesis, or
    /// export fails for any file.
    pub fn process(&mut self) -> Result<()> {
        let range = PointRange::new(self.cli.min_points, self.cli.max_points)?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index, range)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let entries =
                std::fs::read_dir(&self.cli.target).map_err(|e| SynthesisError::FileSystem {
                    path: self.cli.target.clone(),
                    operation: "read directory",
                    source: e,
                })?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry
                    .map_err(|e| SynthesisError::FileSystem {
                        path: self.cli.target.clone(),
                        operation: "read directory entry",
                        source: e,
                    })?
                    .path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print since the statistics report is user-requested output
    #[allow(clippy::print_stdout)]
    fn process_file(&mut self, input_path: &Path, index: usize, range: PointRange) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::output_path(input_path);

        let source = load_canvas(input_path)?;
        let model = TransitionModel::from_canvas(&source)?;

        if self.cli.stats {
            let statistics = ModelStatistics::from_model(&model);
            println!("{}", input_path.display());
            println!("{statistics}");
        }

        let (width, height) = self.output_dimensions(&source)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, width * height);
        }

        let selector = SeededSelector::new(self.cli.seed);
        let mut walk = RandomWalk::new(&model, width, height, range, selector)?;

        if self.cli.visualize {
            walk.enable_capture();
        }

        let mut steps = 0_usize;
        while walk.step()? {
            steps += 1;
            if steps % PROGRESS_UPDATE_INTERVAL == 0 {
                if let Some(ref mut pm) = self.progress_manager {
                    pm.update_painted(index, walk.painted());
                }
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.update_painted(index, walk.painted());
        }

        let capture = walk.take_capture();
        let canvas = walk.into_canvas();
        export_canvas_as_png(&canvas, &output_path)?;

        if let Some(capture) = capture {
            capture.export_gif(Self::visualization_path(input_path), GIF_FRAME_DELAY_MS)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        Ok(())
    }

    fn output_dimensions(&self, source: &Canvas) -> Result<(usize, usize)> {
        let width = self.cli.width.unwrap_or_else(|| source.width());
        let height = self.cli.height.unwrap_or_else(|| source.height());
        Ok((
            Self::validated_dimension("width", width)?,
            Self::validated_dimension("height", height)?,
        ))
    }

    fn validated_dimension(name: &'static str, value: usize) -> Result<usize> {
        if value == 0 {
            return Err(invalid_parameter(name, &value, &"must be nonzero"));
        }
        if value > MAX_OUTPUT_DIMENSION {
            return Err(invalid_parameter(
                name,
                &value,
                &format!("exceeds the maximum dimension {MAX_OUTPUT_DIMENSION}"),
            ));
        }
        Ok(value)
    }

    fn output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        input_path
            .parent()
            .map_or_else(|| PathBuf::from(&output_name), |p| p.join(&output_name))
    }

    fn visualization_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let growth_name = format!("{}_growth.gif", stem.to_string_lossy());

        input_path
            .parent()
            .map_or_else(|| PathBuf::from(&growth_name), |p| p.join(&growth_name))
    }
}

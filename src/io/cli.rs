//! Command-line interface for batch dungeon generation

use crate::algorithm::executor::Dungeon;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_COLUMN_COUNT, DEFAULT_CORRIDOR_LAYOUT, DEFAULT_MAXIMUM_ROOM_SIZE,
    DEFAULT_MINIMUM_ROOM_SIZE, DEFAULT_REMOVE_DEADENDS_RATIO, DEFAULT_ROW_COUNT, DEFAULT_SEED,
    DEFAULT_STAIR_COUNT, DungeonConfig, DungeonLayout, PNG_EXTENSION, PNG_PIXELS_PER_CELL,
    RoomLayout, SVG_EXTENSION,
};
use crate::io::error::{DungeonError, Result, path_error};
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressManager;
use crate::io::svg::{RenderStyle, render};
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dunjon")]
#[command(author, version, about = "Generate seeded dungeon maps as SVG")]
/// Command-line arguments for the dungeon generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory receiving the generated maps
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Seed string for reproducible generation
    #[arg(short, long, default_value = DEFAULT_SEED)]
    pub seed: String,

    /// Step rows (odd)
    #[arg(long, default_value_t = DEFAULT_ROW_COUNT)]
    pub rows: usize,

    /// Step columns (odd)
    #[arg(long, default_value_t = DEFAULT_COLUMN_COUNT)]
    pub cols: usize,

    /// Overall dungeon silhouette
    #[arg(long, value_enum, default_value_t = DungeonLayout::None)]
    pub dungeon_layout: DungeonLayout,

    /// Smallest room side in cells
    #[arg(long, default_value_t = DEFAULT_MINIMUM_ROOM_SIZE)]
    pub min_room: usize,

    /// Largest room side in cells
    #[arg(long, default_value_t = DEFAULT_MAXIMUM_ROOM_SIZE)]
    pub max_room: usize,

    /// Room placement strategy
    #[arg(long, value_enum, default_value_t = RoomLayout::Scattered)]
    pub room_layout: RoomLayout,

    /// Percent chance a corridor keeps its direction (0-100)
    #[arg(long, default_value_t = DEFAULT_CORRIDOR_LAYOUT, allow_negative_numbers = true)]
    pub corridor_layout: i32,

    /// Percent of dead ends to collapse (0-100)
    #[arg(long, default_value_t = DEFAULT_REMOVE_DEADENDS_RATIO, allow_negative_numbers = true)]
    pub remove_deadends: i32,

    /// Number of stairs to place
    #[arg(long, default_value_t = DEFAULT_STAIR_COUNT)]
    pub stairs: usize,

    /// Rendered cell size in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Margin around the drawing in pixels
    #[arg(long, default_value_t = 0)]
    pub padding: u32,

    /// Multiplier applied to the cell size
    #[arg(long, default_value_t = 1.0)]
    pub scale: f32,

    /// Number of maps to generate
    #[arg(long, default_value_t = 1)]
    pub count: usize,

    /// Also write a PNG preview next to each SVG
    #[arg(long)]
    pub png: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate maps even if output exists
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

    /// Generation parameters for the base seed
    pub fn to_config(&self) -> DungeonConfig {
        DungeonConfig {
            seed: self.seed.clone(),
            row_count: self.rows,
            column_count: self.cols,
            dungeon_layout: self.dungeon_layout,
            minimum_room_size: self.min_room,
            maximum_room_size: self.max_room,
            room_layout: self.room_layout,
            corridor_layout: self.corridor_layout,
            remove_deadends_ratio: self.remove_deadends,
            add_stair_count: self.stairs,
            cell_size: self.cell_size,
            map_padding: self.padding,
            scale: self.scale,
        }
    }

    /// Seed of every map in the batch
    ///
    /// A single map keeps the seed as given; larger batches suffix `-1`,
    /// `-2` and so on.
    pub fn seeds(&self) -> Vec<String> {
        if self.count == 1 {
            vec![self.seed.clone()]
        } else {
            (1..=self.count)
                .map(|k| format!("{}-{k}", self.seed))
                .collect()
        }
    }
}

/// Orchestrates generation of a batch of maps with progress tracking
pub struct MapBatch {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MapBatch {
    /// Create a batch runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every map of the batch
    ///
    /// Returns the number of maps written.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the output
    /// directory cannot be created or an output file cannot be written
    pub fn process(&mut self) -> Result<usize> {
        let base = self.cli.to_config();
        base.validate()?;
        if self.cli.output_dir.exists() && !self.cli.output_dir.is_dir() {
            return Err(path_error("Output path must be a directory"));
        }

        let seeds: Vec<String> = self
            .cli
            .seeds()
            .into_iter()
            .filter(|seed| self.should_generate(seed))
            .collect();
        if seeds.is_empty() {
            return Ok(0);
        }

        std::fs::create_dir_all(&self.cli.output_dir).map_err(|e| DungeonError::FileSystem {
            path: self.cli.output_dir.clone(),
            operation: "create directory",
            source: e,
        })?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(seeds.len());
        }

        for seed in &seeds {
            self.process_map(&base.with_seed(seed.as_str()))?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(seeds.len())
    }

    fn should_generate(&self, seed: &str) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path(seed, SVG_EXTENSION);
        if output_path.exists() {
            info!("Skipping: {} (output exists)", output_path.display());
            false
        } else {
            true
        }
    }

    fn process_map(&mut self, config: &DungeonConfig) -> Result<()> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_map(&config.seed);
        }

        let dungeon = Dungeon::generate(config)?;
        let style = RenderStyle::from_config(config);

        let svg_path = self.output_path(&config.seed, SVG_EXTENSION);
        write_svg(&svg_path, &render(&dungeon, &style))?;
        info!("wrote {}", svg_path.display());

        if self.cli.png {
            let png_path = self.output_path(&config.seed, PNG_EXTENSION);
            export_grid_as_png(&dungeon, &style.palette, PNG_PIXELS_PER_CELL, &png_path)?;
            info!("wrote {}", png_path.display());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_map();
        }

        Ok(())
    }

    fn output_path(&self, seed: &str, extension: &str) -> PathBuf {
        self.cli.output_dir.join(format!("{seed}.{extension}"))
    }
}

fn write_svg(path: &Path, document: &str) -> Result<()> {
    std::fs::write(path, document).map_err(|e| DungeonError::FileSystem {
        path: path.to_path_buf(),
        operation: "write map",
        source: e,
    })
}

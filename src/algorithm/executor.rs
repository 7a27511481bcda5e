//! Generation pipeline orchestration
//!
//! Phases run strictly in order on one grid and one random stream:
//! layout mask, rooms, doors, corridors, stairs, dead-end collapse, door
//! fix-up, room fitting, labels and blocked-cell cleanup. Labels draw no
//! random numbers, so their position in the order does not affect the seed.

use log::debug;

use crate::algorithm::corridors::carve_corridors;
use crate::algorithm::deadends::{empty_blocks, fit_rooms, fix_doors, remove_deadends};
use crate::algorithm::doors::{Door, open_rooms};
use crate::algorithm::labels::label_rooms;
use crate::algorithm::rooms::{Room, place_rooms};
use crate::algorithm::stairs::{Stair, place_stairs};
use crate::io::configuration::DungeonConfig;
use crate::io::error::Result;
use crate::math::random::RandomSource;
use crate::spatial::grid::DungeonGrid;
use crate::spatial::mask::apply_layout;

/// A fully laid-out dungeon
#[derive(Debug, Clone)]
pub struct Dungeon {
    /// Finished raster
    pub grid: DungeonGrid,
    /// Rooms in id order
    pub rooms: Vec<Room>,
    /// Surviving doors, each listed once
    pub doors: Vec<Door>,
    /// Placed stairs in selection order
    pub stairs: Vec<Stair>,
}

impl Dungeon {
    /// Validate the configuration and run the whole pipeline
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration is rejected; no grid
    /// is allocated in that case
    pub fn generate(config: &DungeonConfig) -> Result<Self> {
        config.validate()?;
        Ok(DungeonGenerator::new(config).run())
    }

    /// Room with the given id
    pub fn room(&self, id: usize) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }
}

/// Single-use pipeline state for one generation
///
/// Owns the grid and the random stream so concurrent generations never share
/// state.
pub struct DungeonGenerator<'a> {
    config: &'a DungeonConfig,
    grid: DungeonGrid,
    rng: RandomSource,
}

impl<'a> DungeonGenerator<'a> {
    /// Allocate the grid and seed the stream; the config must already be valid
    pub fn new(config: &'a DungeonConfig) -> Self {
        Self {
            config,
            grid: DungeonGrid::new(config.row_count, config.column_count),
            rng: RandomSource::new(&config.seed),
        }
    }

    /// Run every phase and hand over the result
    pub fn run(mut self) -> Dungeon {
        let config = self.config;
        debug!(
            "generating '{}' ({}x{} steps)",
            config.seed,
            self.grid.n_i(),
            self.grid.n_j()
        );

        apply_layout(&mut self.grid, config.dungeon_layout);

        let mut rooms = place_rooms(&mut self.grid, &mut self.rng, config);
        open_rooms(&mut self.grid, &mut self.rng, &mut rooms);

        carve_corridors(
            &mut self.grid,
            &mut self.rng,
            percent(config.corridor_layout),
        );
        let stairs = place_stairs(&mut self.grid, &mut self.rng, config.add_stair_count);

        remove_deadends(
            &mut self.grid,
            &mut self.rng,
            percent(config.remove_deadends_ratio),
        );
        let doors = fix_doors(&self.grid, &mut rooms);
        fit_rooms(&self.grid, &mut rooms);
        // Labels only land on room cells that survived the collapse
        label_rooms(&mut self.grid, &rooms);
        empty_blocks(&mut self.grid);

        Dungeon {
            grid: self.grid,
            rooms,
            doors,
            stairs,
        }
    }
}

fn percent(value: i32) -> u32 {
    value.clamp(0, 100).unsigned_abs()
}

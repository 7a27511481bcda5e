//! Room placement by random scattering or lattice packing
//!
//! Room extents are drawn in step units: a room `h` steps tall covers
//! `2h - 1` cells, so every room side is odd. A placement is rejected if it
//! would leave the grid, touch a blocked cell, or overlap another room.

use log::debug;

use crate::algorithm::doors::Door;
use crate::io::configuration::{DungeonConfig, MAX_ROOMS, RoomLayout};
use crate::math::random::RandomSource;
use crate::spatial::cell::CellFlags;
use crate::spatial::direction::Direction;
use crate::spatial::grid::{BoundingBox, DungeonGrid};

/// A placed room with its doors grouped by wall
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// 1-based id, unique per generation
    pub id: usize,
    /// Interior cells
    pub bounds: BoundingBox,
    doors: [Vec<Door>; 4],
}

impl Room {
    /// Create a room without doors
    pub fn new(id: usize, bounds: BoundingBox) -> Self {
        Self {
            id,
            bounds,
            doors: Default::default(),
        }
    }

    /// Interior height in cells
    pub const fn height(&self) -> usize {
        self.bounds.south - self.bounds.north + 1
    }

    /// Interior width in cells
    pub const fn width(&self) -> usize {
        self.bounds.east - self.bounds.west + 1
    }

    /// Interior area in cells
    pub const fn area(&self) -> usize {
        self.height() * self.width()
    }

    /// Interior height in steps
    pub const fn step_height(&self) -> usize {
        (self.bounds.south - self.bounds.north) / 2 + 1
    }

    /// Interior width in steps
    pub const fn step_width(&self) -> usize {
        (self.bounds.east - self.bounds.west) / 2 + 1
    }

    /// Doors on one wall
    pub fn doors(&self, direction: Direction) -> &[Door] {
        self.doors
            .get(direction.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Record a door on one wall
    pub fn add_door(&mut self, direction: Direction, door: Door) {
        if let Some(doors) = self.doors_mut(direction) {
            doors.push(door);
        }
    }

    /// Mutable door list for one wall
    pub(crate) fn doors_mut(&mut self, direction: Direction) -> Option<&mut Vec<Door>> {
        self.doors.get_mut(direction.index())
    }

    /// Every door of the room with the wall it sits on
    pub fn all_doors(&self) -> impl Iterator<Item = (Direction, &Door)> {
        Direction::ALL
            .into_iter()
            .flat_map(move |dir| self.doors(dir).iter().map(move |door| (dir, door)))
    }
}

/// Step-unit size distribution derived from the cell-size bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSizing {
    /// Smallest extent in steps
    pub base: usize,
    /// Number of distinct extents above `base`, plus one
    pub radix: usize,
}

impl RoomSizing {
    /// Convert cell bounds into step units
    pub const fn from_bounds(minimum: usize, maximum: usize) -> Self {
        Self {
            base: minimum.div_ceil(2),
            radix: (maximum.saturating_sub(minimum)) / 2 + 1,
        }
    }

    /// Draw one extent, limited by the space left after an anchor
    fn pick(self, rng: &mut RandomSource, steps: usize, anchor: Option<usize>) -> usize {
        let radix = anchor.map_or(self.radix, |start| {
            steps
                .saturating_sub(self.base)
                .saturating_sub(start)
                .min(self.radix)
        });
        rng.below(radix) + self.base
    }
}

/// Place rooms according to the configured strategy
pub fn place_rooms(
    grid: &mut DungeonGrid,
    rng: &mut RandomSource,
    config: &DungeonConfig,
) -> Vec<Room> {
    let sizing = RoomSizing::from_bounds(config.minimum_room_size, config.maximum_room_size);
    let mut rooms = Vec::new();

    match config.room_layout {
        RoomLayout::Scattered => {
            let attempts = scatter_attempts(grid, config.maximum_room_size);
            for _ in 0..attempts {
                emplace_room(grid, rng, sizing, &mut rooms, None);
            }
        }
        RoomLayout::Packed => {
            for i in 0..grid.n_i() {
                for j in 0..grid.n_j() {
                    let (r, c) = DungeonGrid::step_cell(i, j);
                    if grid.cell(r, c).is_room() {
                        continue;
                    }
                    if (i == 0 || j == 0) && rng.below(2) == 1 {
                        continue;
                    }
                    emplace_room(grid, rng, sizing, &mut rooms, Some((i, j)));
                }
            }
        }
    }

    debug!("placed {} rooms ({:?})", rooms.len(), config.room_layout);
    rooms
}

/// Number of unconstrained placements tried by the scattered layout
pub const fn scatter_attempts(grid: &DungeonGrid, maximum_room_size: usize) -> usize {
    let room_area = maximum_room_size * maximum_room_size;
    if room_area == 0 {
        0
    } else {
        (grid.n_cols() * grid.n_rows()) / room_area
    }
}

/// Attempt one placement, optionally anchored at step `(i, j)`
fn emplace_room(
    grid: &mut DungeonGrid,
    rng: &mut RandomSource,
    sizing: RoomSizing,
    rooms: &mut Vec<Room>,
    anchor: Option<(usize, usize)>,
) {
    if rooms.len() >= MAX_ROOMS {
        return;
    }

    let height = sizing.pick(rng, grid.n_i(), anchor.map(|(i, _)| i));
    let width = sizing.pick(rng, grid.n_j(), anchor.map(|(_, j)| j));

    let (i, j) = match anchor {
        Some(position) => position,
        None => {
            if height > grid.n_i() || width > grid.n_j() {
                return;
            }
            (
                rng.below(grid.n_i() - height),
                rng.below(grid.n_j() - width),
            )
        }
    };

    let bounds = BoundingBox {
        north: i * 2 + 1,
        south: (i + height) * 2 - 1,
        west: j * 2 + 1,
        east: (j + width) * 2 - 1,
    };
    if bounds.south >= grid.n_rows() || bounds.east >= grid.n_cols() {
        return;
    }
    if !sound_room(grid, &bounds) {
        return;
    }

    let room = Room::new(rooms.len() + 1, bounds);
    stamp_room(grid, &room);
    rooms.push(room);
}

/// True when no covered cell is blocked or already part of a room
fn sound_room(grid: &DungeonGrid, bounds: &BoundingBox) -> bool {
    (bounds.north..=bounds.south).all(|r| {
        (bounds.west..=bounds.east).all(|c| !grid.cell(r as i32, c as i32).blocks_room())
    })
}

/// Write room interior and perimeter halo into the grid
fn stamp_room(grid: &mut DungeonGrid, room: &Room) {
    let b = room.bounds;
    let id = room.id as u16;

    for r in b.north..=b.south {
        for c in b.west..=b.east {
            if let Some(cell) = grid.get_mut(r as i32, c as i32) {
                if cell.is_entrance() {
                    cell.flags.remove(CellFlags::ESPACE);
                    cell.label = 0;
                } else if cell.is_perimeter() {
                    cell.flags.remove(CellFlags::PERIMETER);
                }
                cell.flags.insert(CellFlags::ROOM);
                cell.room_id = id;
            }
        }
    }

    let (north, south) = (b.north as i32 - 1, b.south as i32 + 1);
    let (west, east) = (b.west as i32 - 1, b.east as i32 + 1);

    for r in north..=south {
        mark_perimeter(grid, r, west);
        mark_perimeter(grid, r, east);
    }
    for c in west..=east {
        mark_perimeter(grid, north, c);
        mark_perimeter(grid, south, c);
    }
}

fn mark_perimeter(grid: &mut DungeonGrid, r: i32, c: i32) {
    if !grid
        .flags(r, c)
        .intersects(CellFlags::ROOM | CellFlags::ENTRANCE)
    {
        grid.insert(r, c, CellFlags::PERIMETER);
    }
}

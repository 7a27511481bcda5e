//! Door allocation on room sills
//!
//! A sill is a step cell on a room's boundary whose neighbor one step out is
//! still undecided perimeter. Opening a sill turns the three-cell approach
//! (sill, door, beyond) into entrance and gives the door cell a kind.

use std::collections::HashSet;

use log::debug;

use crate::algorithm::rooms::Room;
use crate::io::configuration::DOOR_ROLL_RANGE;
use crate::math::random::RandomSource;
use crate::spatial::cell::CellFlags;
use crate::spatial::direction::Direction;
use crate::spatial::grid::DungeonGrid;

/// Kind of opening placed on a door cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoorKind {
    /// Open archway
    Arch,
    /// Ordinary unlocked door
    Open,
    /// Locked door
    Locked,
    /// Trapped door
    Trapped,
    /// Secret door
    Secret,
    /// Portcullis
    Portcullis,
}

impl DoorKind {
    /// All kinds in roll table order
    pub const ALL: [Self; 6] = [
        Self::Arch,
        Self::Open,
        Self::Locked,
        Self::Trapped,
        Self::Secret,
        Self::Portcullis,
    ];

    /// Map a roll in `[0, 110)` to a kind
    pub const fn from_roll(roll: usize) -> Self {
        match roll {
            0..15 => Self::Arch,
            15..60 => Self::Open,
            60..75 => Self::Locked,
            75..90 => Self::Trapped,
            90..100 => Self::Secret,
            _ => Self::Portcullis,
        }
    }

    /// Cell flag stamped for this kind
    pub const fn flag(self) -> CellFlags {
        match self {
            Self::Arch => CellFlags::ARCH,
            Self::Open => CellFlags::DOOR,
            Self::Locked => CellFlags::LOCKED,
            Self::Trapped => CellFlags::TRAPPED,
            Self::Secret => CellFlags::SECRET,
            Self::Portcullis => CellFlags::PORTCULLIS,
        }
    }

    /// Kind stored in a set of cell flags
    pub fn from_flags(flags: CellFlags) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| flags.contains(kind.flag()))
    }

    /// Short name used in logs and SVG classes
    pub const fn name(self) -> &'static str {
        match self {
            Self::Arch => "arch",
            Self::Open => "door",
            Self::Locked => "locked",
            Self::Trapped => "trapped",
            Self::Secret => "secret",
            Self::Portcullis => "portcullis",
        }
    }
}

/// A door on a room wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Door {
    /// Door cell row
    pub row: usize,
    /// Door cell column
    pub col: usize,
    /// Opening kind
    pub kind: DoorKind,
    /// Room on the far side, if the door does not open onto a corridor
    pub out_id: Option<usize>,
}

/// Candidate door location on a room boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sill {
    /// Boundary cell row inside the room
    pub sill_r: i32,
    /// Boundary cell column inside the room
    pub sill_c: i32,
    /// Wall the sill faces
    pub direction: Direction,
    /// Door cell row
    pub door_r: i32,
    /// Door cell column
    pub door_c: i32,
    /// Room on the far side, if any
    pub out_id: Option<usize>,
}

/// Open doors for every room in ascending id order
///
/// Returns the number of doors opened.
pub fn open_rooms(grid: &mut DungeonGrid, rng: &mut RandomSource, rooms: &mut [Room]) -> usize {
    let mut connections = HashSet::new();
    let opened = rooms
        .iter_mut()
        .map(|room| open_room(grid, rng, room, &mut connections))
        .sum();

    debug!("opened {opened} doors ({} room links)", connections.len());
    opened
}

fn open_room(
    grid: &mut DungeonGrid,
    rng: &mut RandomSource,
    room: &mut Room,
    connections: &mut HashSet<(usize, usize)>,
) -> usize {
    let mut sills = door_sills(grid, room);
    if sills.is_empty() {
        return 0;
    }
    rng.shuffle(&mut sills);

    let budget = opening_budget(rng, room);
    let mut opened = 0;

    // Rejected picks do not consume budget; the loop ends when sills run out
    while opened < budget {
        let Some(sill) = rng.take(&mut sills) else {
            break;
        };
        if grid.cell(sill.door_r, sill.door_c).is_door_space() {
            continue;
        }
        if let Some(out_id) = sill.out_id {
            let key = (room.id.min(out_id), room.id.max(out_id));
            if !connections.insert(key) {
                continue;
            }
        }

        let kind = open_door(grid, rng, &sill);
        room.add_door(
            sill.direction,
            Door {
                row: sill.door_r as usize,
                col: sill.door_c as usize,
                kind,
                out_id: sill.out_id,
            },
        );
        opened += 1;
    }

    opened
}

/// `⌊√(w·h)⌋ + rand(⌊√(w·h)⌋)` with room extents in steps
pub fn opening_budget(rng: &mut RandomSource, room: &Room) -> usize {
    let base = (room.step_width() * room.step_height()).isqrt();
    base + rng.below(base)
}

/// Collect every valid sill of a room, walls in north/south/west/east order
pub fn door_sills(grid: &DungeonGrid, room: &Room) -> Vec<Sill> {
    let b = room.bounds;
    let mut sills = Vec::new();

    if b.north >= 3 {
        for c in (b.west..=b.east).step_by(2) {
            sills.extend(check_sill(grid, room, b.north, c, Direction::North));
        }
    }
    if b.south + 3 <= grid.n_rows() {
        for c in (b.west..=b.east).step_by(2) {
            sills.extend(check_sill(grid, room, b.south, c, Direction::South));
        }
    }
    if b.west >= 3 {
        for r in (b.north..=b.south).step_by(2) {
            sills.extend(check_sill(grid, room, r, b.west, Direction::West));
        }
    }
    if b.east + 3 <= grid.n_cols() {
        for r in (b.north..=b.south).step_by(2) {
            sills.extend(check_sill(grid, room, r, b.east, Direction::East));
        }
    }

    sills
}

fn check_sill(
    grid: &DungeonGrid,
    room: &Room,
    sill_r: usize,
    sill_c: usize,
    direction: Direction,
) -> Option<Sill> {
    let (sill_r, sill_c) = (sill_r as i32, sill_c as i32);
    let door_r = sill_r + direction.di();
    let door_c = sill_c + direction.dj();

    let door_cell = grid.get(door_r, door_c)?;
    if !door_cell.is_perimeter() || door_cell.blocks_door() {
        return None;
    }

    let out_cell = grid.get(door_r + direction.di(), door_c + direction.dj())?;
    if out_cell.is_blocked() {
        return None;
    }

    let out_id = if out_cell.is_room() {
        let id = usize::from(out_cell.room_id);
        if id == room.id {
            return None;
        }
        Some(id)
    } else {
        None
    };

    Some(Sill {
        sill_r,
        sill_c,
        direction,
        door_r,
        door_c,
        out_id,
    })
}

/// Turn a sill's approach into entrance and stamp a weighted door kind
fn open_door(grid: &mut DungeonGrid, rng: &mut RandomSource, sill: &Sill) -> DoorKind {
    for step in 0..3 {
        let r = sill.sill_r + sill.direction.di() * step;
        let c = sill.sill_c + sill.direction.dj() * step;
        grid.remove(r, c, CellFlags::PERIMETER);
        grid.insert(r, c, CellFlags::ENTRANCE);
    }

    let kind = DoorKind::from_roll(rng.below(DOOR_ROLL_RANGE));
    grid.insert(sill.door_r, sill.door_c, kind.flag());
    kind
}

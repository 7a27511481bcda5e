//! Cell attribute model for the double-resolution dungeon raster
//!
//! Every grid cell carries a set of independent boolean attributes plus two
//! packed sub-fields: the owning room id and a one-byte label character used
//! for room numbers and stair glyphs.

use bitflags::bitflags;

bitflags! {
    /// Primitive and composite cell attributes
    ///
    /// Composite constants are unions of primitives and are meant for
    /// intersection tests, never for stamping onto a cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CellFlags: u32 {
        /// Outside the dungeon silhouette, or not yet claimed
        const BLOCKED = 1 << 0;
        /// Room interior
        const ROOM = 1 << 1;
        /// Carved corridor
        const CORRIDOR = 1 << 2;
        /// Undecided halo around a room
        const PERIMETER = 1 << 4;
        /// Approach path through a chosen sill
        const ENTRANCE = 1 << 5;
        /// Open archway
        const ARCH = 1 << 16;
        /// Unlocked door
        const DOOR = 1 << 17;
        /// Locked door
        const LOCKED = 1 << 18;
        /// Trapped door
        const TRAPPED = 1 << 19;
        /// Secret door
        const SECRET = 1 << 20;
        /// Portcullis
        const PORTCULLIS = 1 << 21;
        /// Stairs leading down
        const STAIR_DOWN = 1 << 22;
        /// Stairs leading up
        const STAIR_UP = 1 << 23;

        /// Walkable space
        const OPENSPACE = Self::ROOM.bits() | Self::CORRIDOR.bits();
        /// Any of the six door kinds
        const DOORSPACE = Self::ARCH.bits()
            | Self::DOOR.bits()
            | Self::LOCKED.bits()
            | Self::TRAPPED.bits()
            | Self::SECRET.bits()
            | Self::PORTCULLIS.bits();
        /// Entrance state that a newly stamped room wipes out
        const ESPACE = Self::ENTRANCE.bits() | Self::DOORSPACE.bits();
        /// Either stair direction
        const STAIRS = Self::STAIR_DOWN.bits() | Self::STAIR_UP.bits();
        /// Cells a room may not be placed over
        const BLOCK_ROOM = Self::BLOCKED.bits() | Self::ROOM.bits();
        /// Cells a corridor may not be carved through
        const BLOCK_CORRIDOR = Self::BLOCKED.bits() | Self::PERIMETER.bits() | Self::CORRIDOR.bits();
        /// Cells that cannot become a new door
        const BLOCK_DOOR = Self::BLOCKED.bits() | Self::DOORSPACE.bits();
    }
}

/// A single raster cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Attribute flags
    pub flags: CellFlags,
    /// Owning room id (0 = none)
    pub room_id: u16,
    /// ASCII label character code (0 = none)
    pub label: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Self::NOTHING
    }
}

impl Cell {
    /// An empty cell outside any structure
    pub const NOTHING: Self = Self {
        flags: CellFlags::empty(),
        room_id: 0,
        label: 0,
    };

    /// Room or corridor
    pub const fn is_open_space(&self) -> bool {
        self.flags.intersects(CellFlags::OPENSPACE)
    }

    /// Holds any kind of door
    pub const fn is_door_space(&self) -> bool {
        self.flags.intersects(CellFlags::DOORSPACE)
    }

    /// Holds either stair kind
    pub const fn is_stairs(&self) -> bool {
        self.flags.intersects(CellFlags::STAIRS)
    }

    /// Marked blocked by the layout mask
    pub const fn is_blocked(&self) -> bool {
        self.flags.contains(CellFlags::BLOCKED)
    }

    /// Blocked for room placement
    pub const fn blocks_room(&self) -> bool {
        self.flags.intersects(CellFlags::BLOCK_ROOM)
    }

    /// Blocked for corridor carving
    pub const fn blocks_corridor(&self) -> bool {
        self.flags.intersects(CellFlags::BLOCK_CORRIDOR)
    }

    /// Blocked for door placement
    pub const fn blocks_door(&self) -> bool {
        self.flags.intersects(CellFlags::BLOCK_DOOR)
    }

    /// Room interior
    pub const fn is_room(&self) -> bool {
        self.flags.contains(CellFlags::ROOM)
    }

    /// Carved corridor
    pub const fn is_corridor(&self) -> bool {
        self.flags.contains(CellFlags::CORRIDOR)
    }

    /// Corridor with no other attribute set
    pub fn is_bare_corridor(&self) -> bool {
        self.flags == CellFlags::CORRIDOR
    }

    /// Undecided room halo
    pub const fn is_perimeter(&self) -> bool {
        self.flags.contains(CellFlags::PERIMETER)
    }

    /// Approach path to a door
    pub const fn is_entrance(&self) -> bool {
        self.flags.contains(CellFlags::ENTRANCE)
    }

    /// Label as a character, if any
    pub fn label_char(&self) -> Option<char> {
        (self.label != 0).then(|| char::from(self.label))
    }
}

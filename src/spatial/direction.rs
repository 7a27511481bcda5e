//! Cardinal directions on the step grid

/// One of the four cardinal directions
///
/// `ALL` fixes the iteration order used by every template scan, so it is part
/// of the seed-to-dungeon mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Decreasing row
    North,
    /// Increasing row
    South,
    /// Decreasing column
    West,
    /// Increasing column
    East,
}

impl Direction {
    /// All directions in template scan order
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::West, Self::East];

    /// Row delta
    pub const fn di(self) -> i32 {
        match self {
            Self::North => -1,
            Self::South => 1,
            Self::West | Self::East => 0,
        }
    }

    /// Column delta
    pub const fn dj(self) -> i32 {
        match self {
            Self::West => -1,
            Self::East => 1,
            Self::North | Self::South => 0,
        }
    }

    /// The reverse direction
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Stable slot for per-direction tables
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::West => 2,
            Self::East => 3,
        }
    }

    /// Rotate a template offset written for `North` into this direction
    ///
    /// Offsets are `[row, col]`; `North.rotate(x) == x`.
    pub const fn rotate(self, offset: [i32; 2]) -> [i32; 2] {
        let [r, c] = offset;
        match self {
            Self::North => [r, c],
            Self::South => [-r, -c],
            Self::West => [c, r],
            Self::East => [-c, -r],
        }
    }
}

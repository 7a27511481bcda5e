//! Tests for stair terminus detection and placement

#[cfg(test)]
mod tests {
    use dunjon::algorithm::stairs::{StairKind, is_stair_end, place_stairs, stair_ends};
    use dunjon::math::random::RandomSource;
    use dunjon::spatial::cell::CellFlags;
    use dunjon::spatial::direction::Direction;
    use dunjon::spatial::grid::DungeonGrid;

    /// Vertical corridor down column 5 from row 1 to row 9
    fn straight_corridor() -> DungeonGrid {
        let mut grid = DungeonGrid::new(11, 11);
        for r in 1..=9 {
            grid.insert(r, 5, CellFlags::CORRIDOR);
        }
        grid
    }

    // Tests both ends of a straight corridor are termini facing outward
    // Verified by swapping the South rotation signs
    #[test]
    fn test_straight_corridor_termini() {
        let grid = straight_corridor();
        assert!(is_stair_end(&grid, 1, 5, Direction::North));
        assert!(is_stair_end(&grid, 9, 5, Direction::South));
        assert!(!is_stair_end(&grid, 1, 5, Direction::South));
        assert!(!is_stair_end(&grid, 5, 5, Direction::North));

        let ends = stair_ends(&grid);
        assert_eq!(ends.len(), 2);
        let first = ends.first().map(|e| (e.row, e.col, e.next_row, e.next_col));
        let last = ends.last().map(|e| (e.row, e.col, e.next_row, e.next_col));
        assert_eq!(first, Some((1, 5, 2, 5)));
        assert_eq!(last, Some((9, 5, 8, 5)));
    }

    // Tests a side opening disqualifies a terminus
    // Verified by omitting the diagonal offsets from the walled template
    #[test]
    fn test_side_opening_not_terminus() {
        let mut grid = straight_corridor();
        grid.insert(1, 6, CellFlags::CORRIDOR);
        assert!(!is_stair_end(&grid, 1, 5, Direction::North));
        assert_eq!(stair_ends(&grid).len(), 1);
    }

    // Tests termini must be three bare corridor cells long
    // Verified by accepting room cells as corridor
    #[test]
    fn test_short_or_room_corridor_not_terminus() {
        let mut grid = DungeonGrid::new(11, 11);
        grid.insert(1, 5, CellFlags::CORRIDOR);
        grid.insert(2, 5, CellFlags::CORRIDOR);
        assert!(stair_ends(&grid).is_empty());

        let mut roomy = straight_corridor();
        roomy.insert(3, 5, CellFlags::ROOM);
        assert!(!is_stair_end(&roomy, 1, 5, Direction::North));
    }

    // Tests the first stair goes down, the second up, with matching cell state
    // Verified by choosing the first kind randomly
    #[test]
    fn test_place_stairs_down_then_up() {
        let mut grid = straight_corridor();
        let mut rng = RandomSource::new("stairs");
        let stairs = place_stairs(&mut grid, &mut rng, 2);

        assert_eq!(stairs.len(), 2);
        let kinds: Vec<_> = stairs.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![StairKind::Down, StairKind::Up]);

        for stair in &stairs {
            let cell = grid.cell(stair.row as i32, stair.col as i32);
            assert!(cell.flags.contains(stair.kind.flag()));
            assert_eq!(cell.label, stair.kind.label());
            assert!(grid.cell(stair.next_row as i32, stair.next_col as i32).is_corridor());
        }
    }

    // Tests requests beyond the number of termini are truncated
    // Verified by reusing termini
    #[test]
    fn test_place_stairs_limited_by_termini() {
        let mut grid = straight_corridor();
        let mut rng = RandomSource::new("many");
        assert_eq!(place_stairs(&mut grid, &mut rng, 5).len(), 2);

        let mut untouched = straight_corridor();
        assert!(place_stairs(&mut untouched, &mut rng, 0).is_empty());
        assert!(untouched.indexed_cells().all(|(_, cell)| !cell.is_stairs()));
    }

    // Tests stair labels
    // Verified by swapping the label characters
    #[test]
    fn test_stair_kind_labels() {
        assert_eq!(StairKind::Down.label(), b'd');
        assert_eq!(StairKind::Up.label(), b'u');
        assert_eq!(StairKind::Down.flag(), CellFlags::STAIR_DOWN);
        assert_eq!(StairKind::Up.flag(), CellFlags::STAIR_UP);
    }
}

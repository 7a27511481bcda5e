//! Tests for sill discovery, door kinds and door allocation

#[cfg(test)]
mod tests {
    use dunjon::algorithm::doors::{DoorKind, door_sills, open_rooms, opening_budget};
    use dunjon::algorithm::rooms::Room;
    use dunjon::math::random::RandomSource;
    use dunjon::spatial::cell::CellFlags;
    use dunjon::spatial::direction::Direction;
    use dunjon::spatial::grid::{BoundingBox, DungeonGrid};

    /// Stamp a room and its perimeter ring by hand
    fn stamp(grid: &mut DungeonGrid, id: usize, bounds: BoundingBox) -> Room {
        for r in bounds.north - 1..=bounds.south + 1 {
            for c in bounds.west - 1..=bounds.east + 1 {
                let (ri, ci) = (r as i32, c as i32);
                if bounds.contains(r, c) {
                    grid.remove(ri, ci, CellFlags::PERIMETER);
                    grid.insert(ri, ci, CellFlags::ROOM);
                    if let Some(cell) = grid.get_mut(ri, ci) {
                        cell.room_id = id as u16;
                    }
                } else if !grid.cell(ri, ci).is_room() {
                    grid.insert(ri, ci, CellFlags::PERIMETER);
                }
            }
        }
        Room::new(id, bounds)
    }

    fn centered_room(grid: &mut DungeonGrid) -> Room {
        stamp(
            grid,
            1,
            BoundingBox {
                north: 3,
                south: 5,
                west: 3,
                east: 5,
            },
        )
    }

    // Tests roll boundaries of the door kind table
    // Verified by shifting the locked range by one
    #[test]
    fn test_door_kind_roll_table() {
        let expected = [
            (0, DoorKind::Arch),
            (14, DoorKind::Arch),
            (15, DoorKind::Open),
            (59, DoorKind::Open),
            (60, DoorKind::Locked),
            (74, DoorKind::Locked),
            (75, DoorKind::Trapped),
            (89, DoorKind::Trapped),
            (90, DoorKind::Secret),
            (99, DoorKind::Secret),
            (100, DoorKind::Portcullis),
            (109, DoorKind::Portcullis),
        ];
        for (roll, kind) in expected {
            assert_eq!(DoorKind::from_roll(roll), kind, "roll {roll}");
        }
    }

    // Tests each kind owns a distinct flag that decodes back
    // Verified by giving Locked the DOOR flag
    #[test]
    fn test_door_kind_flags() {
        for kind in DoorKind::ALL {
            assert_eq!(DoorKind::from_flags(kind.flag()), Some(kind));
            assert_eq!(
                DoorKind::from_flags(kind.flag() | CellFlags::ENTRANCE),
                Some(kind)
            );
            assert!(!kind.name().is_empty());
        }
        assert_eq!(DoorKind::from_flags(CellFlags::CORRIDOR), None);
    }

    // Tests every wall step of an interior room yields a corridor-facing sill
    // Verified by iterating wall cells with step 1
    #[test]
    fn test_door_sills_interior_room() {
        let mut grid = DungeonGrid::new(11, 11);
        let room = centered_room(&mut grid);
        let sills = door_sills(&grid, &room);

        assert_eq!(sills.len(), 8);
        for sill in &sills {
            assert_eq!(sill.out_id, None);
            assert_eq!(sill.door_r, sill.sill_r + sill.direction.di());
            assert_eq!(sill.door_c, sill.sill_c + sill.direction.dj());
            assert!(grid.cell(sill.door_r, sill.door_c).is_perimeter());
            assert!(grid.cell(sill.sill_r, sill.sill_c).is_room());
        }
        let north = sills
            .iter()
            .filter(|s| s.direction == Direction::North)
            .count();
        assert_eq!(north, 2);
    }

    // Tests walls on the grid border offer no sills
    // Verified by removing the b.north >= 3 guard
    #[test]
    fn test_door_sills_skip_border_walls() {
        let mut grid = DungeonGrid::new(11, 11);
        let room = stamp(
            &mut grid,
            1,
            BoundingBox {
                north: 1,
                south: 3,
                west: 1,
                east: 3,
            },
        );
        let sills = door_sills(&grid, &room);
        assert!(sills.iter().all(|s| s.direction == Direction::South
            || s.direction == Direction::East));
        assert_eq!(sills.len(), 4);
    }

    // Tests sills toward a neighboring room record its id
    // Verified by reporting out_id as None unconditionally
    #[test]
    fn test_door_sills_between_rooms() {
        let mut grid = DungeonGrid::new(11, 11);
        let left = stamp(
            &mut grid,
            1,
            BoundingBox {
                north: 1,
                south: 3,
                west: 1,
                east: 3,
            },
        );
        stamp(
            &mut grid,
            2,
            BoundingBox {
                north: 1,
                south: 3,
                west: 5,
                east: 7,
            },
        );

        let east: Vec<_> = door_sills(&grid, &left)
            .into_iter()
            .filter(|s| s.direction == Direction::East)
            .collect();
        assert_eq!(east.len(), 2);
        assert!(east.iter().all(|s| s.out_id == Some(2)));
    }

    // Tests the opening budget range for a 2×2-step room
    // Verified by using cell extents instead of step extents
    #[test]
    fn test_opening_budget_range() {
        let mut grid = DungeonGrid::new(11, 11);
        let room = centered_room(&mut grid);
        let mut rng = RandomSource::new("budget");
        for _ in 0..50 {
            let budget = opening_budget(&mut rng, &room);
            assert!((2..=3).contains(&budget), "budget {budget}");
        }
    }

    // Tests opened doors are stamped as entrances with a door kind
    // Verified by skipping the perimeter removal in open_door
    #[test]
    fn test_open_rooms_stamps_doors() {
        let mut grid = DungeonGrid::new(11, 11);
        let mut rooms = vec![centered_room(&mut grid)];
        let mut rng = RandomSource::new("doors");

        let opened = open_rooms(&mut grid, &mut rng, &mut rooms);
        let recorded: Vec<_> = rooms.iter().flat_map(|room| room.all_doors()).collect();

        assert!((2..=3).contains(&opened));
        assert_eq!(recorded.len(), opened);
        for (direction, door) in recorded {
            let cell = grid.cell(door.row as i32, door.col as i32);
            assert!(cell.is_entrance());
            assert!(!cell.is_perimeter());
            assert_eq!(DoorKind::from_flags(cell.flags), Some(door.kind));

            let beyond = grid.cell(
                door.row as i32 + direction.di(),
                door.col as i32 + direction.dj(),
            );
            assert!(beyond.is_entrance());
        }
    }

    // Tests two rooms are joined by at most one door
    // Verified by not recording the connection pair
    #[test]
    fn test_open_rooms_single_connection_per_pair() {
        for seed in ["pair-a", "pair-b", "pair-c", "pair-d"] {
            let mut grid = DungeonGrid::new(5, 17);
            let mut rooms = vec![
                stamp(
                    &mut grid,
                    1,
                    BoundingBox {
                        north: 1,
                        south: 3,
                        west: 1,
                        east: 7,
                    },
                ),
                stamp(
                    &mut grid,
                    2,
                    BoundingBox {
                        north: 1,
                        south: 3,
                        west: 9,
                        east: 15,
                    },
                ),
            ];
            let mut rng = RandomSource::new(seed);
            open_rooms(&mut grid, &mut rng, &mut rooms);

            let links = rooms
                .iter()
                .flat_map(|room| room.all_doors())
                .filter(|(_, door)| door.out_id.is_some())
                .count();
            assert!(links <= 1, "seed {seed} linked the rooms {links} times");
        }
    }
}

//! Room number labels written into the grid for the renderer

use crate::algorithm::rooms::Room;
use crate::spatial::grid::DungeonGrid;

/// Encode each room id as ASCII digits centered in the room
pub fn label_rooms(grid: &mut DungeonGrid, rooms: &[Room]) {
    for room in rooms {
        let (row, col) = label_origin(room);
        let text = room.id.to_string();
        for (offset, byte) in (0_i32..).zip(text.bytes()) {
            if let Some(cell) = grid.get_mut(row, col + offset) {
                cell.label = byte;
            }
        }
    }
}

/// Row and first column of a room's label
///
/// Labels wider than the room start on its west column.
pub fn label_origin(room: &Room) -> (i32, i32) {
    let b = room.bounds;
    let len = room.id.to_string().len() as i32;
    let row = ((b.north + b.south) / 2) as i32;
    let col = ((b.west as i32 + b.east as i32 - len) / 2 + 1).max(b.west as i32);
    (row, col)
}

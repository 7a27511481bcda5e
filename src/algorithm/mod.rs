/// Corridor backtracker with straightness bias
pub mod corridors;
/// Dead-end collapsing, door fix-up and cleanup
pub mod deadends;
/// Sill discovery and door allocation
pub mod doors;
/// Pipeline orchestration and the finished dungeon
pub mod executor;
/// Room number labels
pub mod labels;
/// Scattered and packed room placement
pub mod rooms;
/// Stair placement at corridor termini
pub mod stairs;

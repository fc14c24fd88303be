//! Shared HTTP helpers

mod room_selection;

pub use room_selection::RoomSelection;

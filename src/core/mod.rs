pub mod actions;
pub mod chaos_game;
pub mod data;
pub mod transforms;

pub mod canvas;
#[allow(clippy::module_inception)]
pub mod chaos_game;
pub mod colour_maps;
pub mod description;
pub mod ports;
pub mod presets;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::chaos_game::colour_maps::kinds::HitColourMapKinds;
use crate::core::data::colour::Colour;
use std::convert::Infallible;

/// Black wherever at least one point landed, white elsewhere.
#[derive(Debug, Default)]
pub struct BinaryColourMap {}

impl ColourMap for BinaryColourMap {
    type T = u32;
    type Failure = Infallible;

    fn map(&self, hits: u32) -> Result<Colour, Infallible> {
        Ok(if hits > 0 { Colour::BLACK } else { Colour::WHITE })
    }

    fn display_name(&self) -> &str {
        HitColourMapKinds::Binary.display_name()
    }
}

impl BinaryColourMap {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::chaos_game::colour_maps::errors::HitColourMapError;
use crate::core::chaos_game::colour_maps::kinds::HitColourMapKinds;
use crate::core::data::colour::Colour;

const SPARSE: Colour = Colour {
    r: 255,
    g: 224,
    b: 160,
};

const DENSE: Colour = Colour {
    r: 12,
    g: 24,
    b: 96,
};

fn lerp(from: u8, to: u8, t: f64) -> u8 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8
}

/// Log-scaled hit density: unvisited cells are white, the rest shade from pale yellow
/// towards dark blue as hits approach `max_hits`.
#[derive(Debug)]
pub struct DensityGradient {
    max_hits: u32,
}

impl ColourMap for DensityGradient {
    type T = u32;
    type Failure = HitColourMapError;

    fn map(&self, hits: u32) -> Result<Colour, HitColourMapError> {
        if hits > self.max_hits {
            return Err(HitColourMapError::HitsExceedMax {
                hits,
                max_hits: self.max_hits,
            });
        }

        if hits == 0 {
            return Ok(Colour::WHITE);
        }

        let t = f64::from(hits).ln_1p() / f64::from(self.max_hits).ln_1p();

        Ok(Colour {
            r: lerp(SPARSE.r, DENSE.r, t),
            g: lerp(SPARSE.g, DENSE.g, t),
            b: lerp(SPARSE.b, DENSE.b, t),
        })
    }

    fn display_name(&self) -> &str {
        HitColourMapKinds::DensityGradient.display_name()
    }
}

impl DensityGradient {
    #[must_use]
    pub fn new(max_hits: u32) -> Self {
        Self { max_hits }
    }

    #[must_use]
    pub fn max_hits(&self) -> u32 {
        self.max_hits
    }
}

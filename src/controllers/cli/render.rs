use std::{path::Path, time::Instant};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::chaos_game::canvas::ChaosCanvas;
use crate::core::chaos_game::chaos_game::ChaosGame;
use crate::core::chaos_game::colour_maps::binary::BinaryColourMap;
use crate::core::chaos_game::colour_maps::density_gradient::DensityGradient;
use crate::core::chaos_game::colour_maps::kinds::HitColourMapKinds;
use crate::core::chaos_game::description::ChaosGameDescription;
use crate::core::chaos_game::presets::PresetKinds;
use crate::core::data::pixel_buffer::PixelBuffer;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_STEPS: u64 = 2_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub preset: PresetKinds,
    pub colour_map: HitColourMapKinds,
    pub width: u32,
    pub height: u32,
    pub steps: u64,
    /// Fixed seed for reproducible images; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            preset: PresetKinds::default(),
            colour_map: HitColourMapKinds::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            steps: DEFAULT_STEPS,
            seed: None,
        }
    }
}

/// One `"<kind> (weight <w>): <parameters>"` line per transform of `description`.
fn transform_lines(description: &ChaosGameDescription) -> Vec<String> {
    description
        .transforms()
        .iter()
        .map(|t| format!("{} (weight {}): {}", t.transform.kind_name(), t.weight, t.transform))
        .collect()
}

pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    config: RenderConfig,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, config: RenderConfig) -> Self {
        Self {
            presenter,
            config,
            buffer: None,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let RenderConfig {
            preset,
            colour_map,
            width,
            height,
            steps,
            seed,
        } = self.config;

        let description = preset.description()?;
        let mut canvas = ChaosCanvas::for_description(&description, width, height)?;
        let mut game = match seed {
            Some(seed) => ChaosGame::seeded(description, seed)?,
            None => ChaosGame::from_entropy(description)?,
        };

        println!("Rendering {}...", preset.display_name());
        for line in transform_lines(game.description()) {
            println!("  {}", line);
        }
        println!("Image size: {}x{}", width, height);
        println!("Steps: {}", steps);

        let start = Instant::now();
        let summary = game.run_steps(steps, &mut canvas);
        let duration = start.elapsed();

        println!("Duration:   {:?}", duration);
        println!("Plotted: {}, outside window: {}", summary.plotted, summary.dropped);

        let buffer = match colour_map {
            HitColourMapKinds::Binary => {
                let mapper = BinaryColourMap::new();
                println!("Colour map: {}", mapper.display_name());
                generate_pixel_buffer(canvas.hit_data(), &mapper, canvas.pixel_rect())?
            }
            HitColourMapKinds::DensityGradient => {
                let mapper = DensityGradient::new(canvas.max_hits());
                println!("Colour map: {}", mapper.display_name());
                generate_pixel_buffer(canvas.hit_data(), &mapper, canvas.pixel_rect())?
            }
        };

        self.buffer = Some(buffer);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?
        }

        Ok(())
    }
}

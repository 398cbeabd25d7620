mod controllers;
mod core;
mod presenters;

pub use controllers::cli::render::{
    CliRenderController, DEFAULT_HEIGHT, DEFAULT_STEPS, DEFAULT_WIDTH, RenderConfig,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use presenters::file::ppm::{PpmFilePresenter, write_ppm};

pub use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_STEPS, CancelToken, Cancelled, NeverCancel, StepPoller,
};
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::chaos_game::canvas::{CanvasError, ChaosCanvas};
pub use crate::core::chaos_game::chaos_game::{ChaosGame, ChaosGameError, RunSummary};
pub use crate::core::chaos_game::colour_maps::binary::BinaryColourMap;
pub use crate::core::chaos_game::colour_maps::density_gradient::DensityGradient;
pub use crate::core::chaos_game::colour_maps::errors::HitColourMapError;
pub use crate::core::chaos_game::colour_maps::kinds::HitColourMapKinds;
pub use crate::core::chaos_game::description::{
    ChaosGameDescription, DescriptionError, WeightedTransform,
};
pub use crate::core::chaos_game::ports::point_sink::PointSink;
pub use crate::core::chaos_game::presets::{
    DEFAULT_JULIA_POINT, PresetKinds, barnsley_fern, julia_set, sierpinski_triangle,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::matrix2x2::Matrix2x2;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::vector2d::Vector2D;
pub use crate::core::transforms::affine::AffineTransform2D;
pub use crate::core::transforms::errors::TransformError;
pub use crate::core::transforms::julia::{JuliaSign, JuliaTransform};
pub use crate::core::transforms::transform2d::Transform2D;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes binary (P6) PPM images.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(filepath)?);
        write_ppm(buffer, &mut writer)?;
        writer.flush()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

pub fn write_ppm<W: Write>(buffer: &PixelBuffer, out: &mut W) -> std::io::Result<()> {
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    // P6 = binary RGB, then width, height and max colour value
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", width, height)?;
    writeln!(out, "255")?;
    out.write_all(buffer.buffer())
}

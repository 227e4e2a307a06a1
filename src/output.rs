//! PNG output to a file or standard output

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Error type for output operations
#[derive(Debug)]
pub enum OutputError {
    /// Output file could not be created
    Open { path: PathBuf, source: io::Error },
    /// PNG encoding error
    Image(image::ImageError),
    /// IO error while flushing encoded bytes
    Io(io::Error),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Open { path, source } => {
                write!(f, "cannot create '{}': {}", path.display(), source)
            }
            OutputError::Image(e) => write!(f, "Image error: {}", e),
            OutputError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Open { source, .. } => Some(source),
            OutputError::Image(e) => Some(e),
            OutputError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for OutputError {
    fn from(e: io::Error) -> Self {
        OutputError::Io(e)
    }
}

impl From<image::ImageError> for OutputError {
    fn from(e: image::ImageError) -> Self {
        OutputError::Image(e)
    }
}

/// Where the encoded image goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `None` means standard output.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) => OutputTarget::File(p.to_path_buf()),
            None => OutputTarget::Stdout,
        }
    }

    /// Open the destination for writing.
    ///
    /// Creating a file truncates any existing one. Missing parent directories
    /// are an error.
    pub fn open(&self) -> Result<Box<dyn Write>, OutputError> {
        match self {
            OutputTarget::Stdout => Ok(Box::new(io::stdout().lock())),
            OutputTarget::File(path) => {
                let file = File::create(path)
                    .map_err(|source| OutputError::Open { path: path.clone(), source })?;
                Ok(Box::new(file))
            }
        }
    }
}

impl std::fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputTarget::Stdout => write!(f, "<stdout>"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Encode an RGBA image as PNG into `writer`.
///
/// # Errors
///
/// * `OutputError::Image` if encoding fails
/// * `OutputError::Io` if the final flush fails
pub fn write_png<W: Write>(image: &RgbaImage, writer: W) -> Result<(), OutputError> {
    let mut writer = BufWriter::new(writer);
    PngEncoder::new(&mut writer).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgba8,
    )?;
    writer.flush()?;
    Ok(())
}

/// Open `target` and write `image` to it as PNG.
pub fn save_png(image: &RgbaImage, target: &OutputTarget) -> Result<(), OutputError> {
    let writer = target.open()?;
    write_png(image, writer)
}

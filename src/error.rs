use thiserror::Error;

/// Errors from loading, saving and decoding; drawing itself never fails
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("image is {width}x{height} but has {actual} bytes, expected {expected}")]
    ImageSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("surface must not be empty, got {width}x{height}")]
    EmptySurface { width: u32, height: u32 },
    #[error("scene parse error: {0}")]
    SceneParse(#[from] ron::error::SpannedError),
    #[error("scene serialize error: {0}")]
    SceneSerialize(#[from] ron::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

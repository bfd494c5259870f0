pub mod batch;
pub mod transform;
pub mod white_key;

pub use batch::{BatchSummary, DEFAULT_ASSETS, PathPair, default_pairs, process_all};
pub use transform::{TransformOutcome, TransformReport, make_transparent, run};
pub use white_key::{DEFAULT_THRESHOLD, TRANSPARENT_WHITE, WhiteKeyConfig, is_near_white};

use image::RgbaImage;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Image(#[from] image::ImageError),
}

pub trait Effect {
    fn apply(&self, image: &mut RgbaImage) -> Result<()>;
}

use crate::{Result, batch::PathPair, white_key::WhiteKeyConfig};
use image::{ImageFormat, ImageReader};
use std::{
    fmt, fs,
    io::Cursor,
    path::{Path, PathBuf},
};

/// What a successful transform did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub keyed_pixels: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutcome {
    Success(TransformReport),
    Failure { input: PathBuf, reason: String },
}

impl TransformOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TransformOutcome::Success(_))
    }

    pub fn input(&self) -> &Path {
        match self {
            TransformOutcome::Success(report) => &report.input,
            TransformOutcome::Failure { input, .. } => input,
        }
    }
}

impl fmt::Display for TransformOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformOutcome::Success(report) => write!(
                f,
                "Success: {} -> {}",
                report.input.display(),
                report.output.display()
            ),
            TransformOutcome::Failure { input, reason } => {
                write!(f, "Error ({}): {}", input.display(), reason)
            }
        }
    }
}

/// Decode `input`, key its near-white pixels and write the result to `output` as PNG.
///
/// `output` may equal `input`. The PNG is encoded in memory first, so the
/// target file is only replaced once encoding has succeeded.
pub fn make_transparent<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: &WhiteKeyConfig,
) -> Result<TransformReport> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let mut img = ImageReader::open(input)?
        .with_guessed_format()?
        .decode()?
        .to_rgba8();
    let (width, height) = img.dimensions();
    log::debug!("Decoded {}: {}x{}", input.display(), width, height);

    let keyed_pixels = config.key_pixels(&mut img);

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    fs::write(output, buf.into_inner())?;

    log::info!(
        "Keyed {keyed_pixels} of {} pixels: {} -> {}",
        width as u64 * height as u64,
        input.display(),
        output.display()
    );

    Ok(TransformReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        width,
        height,
        keyed_pixels,
    })
}

/// Run one pair and turn any error into a reportable outcome
pub fn run(pair: &PathPair, config: &WhiteKeyConfig) -> TransformOutcome {
    match make_transparent(&pair.input, &pair.output, config) {
        Ok(report) => TransformOutcome::Success(report),
        Err(e) => {
            log::warn!("Transform failed for {}: {e}", pair.input.display());
            TransformOutcome::Failure {
                input: pair.input.clone(),
                reason: e.to_string(),
            }
        }
    }
}

use alpha_key::{Effect, WhiteKeyConfig, make_transparent};
use image::{Rgba, RgbaImage};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    // White background with a gradient disc in the middle
    let img = RgbaImage::from_fn(256, 256, |x, y| {
        let (dx, dy) = (x as i32 - 128, y as i32 - 128);
        if dx * dx + dy * dy < 80 * 80 {
            Rgba([x as u8, y as u8, 180, 255])
        } else {
            Rgba([250, 252, 255, 255])
        }
    });

    let input = output_dir.join("white_background.png");
    img.save(&input)?;

    let output = output_dir.join("white_background_keyed.png");
    let report = make_transparent(&input, &output, &WhiteKeyConfig::new())?;
    log::info!("{report:?}");

    let mut in_memory = img.clone();
    WhiteKeyConfig::new().with_threshold(200).apply(&mut in_memory)?;
    in_memory.save(output_dir.join("white_background_keyed_200.png"))?;

    println!("✓ Keyed images written to {}", output_dir.display());

    Ok(())
}

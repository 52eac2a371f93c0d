use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use image::{ColorType, DynamicImage};
use ndarray::Array3;

use median_filter::filters::buffer::{from_interleaved, into_interleaved, side_by_side};
use median_filter::MedianFilter;

/// Remove salt-and-pepper noise from an image with a median filter
#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Args {
    /// Image file to filter
    pub file: PathBuf,

    /// Side length of the square window, must be odd
    #[clap(short, long, default_value_t = 3)]
    pub kernel_size: usize,

    /// Where to write the filtered image [default: <file>_median.png]
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Also write source and result side by side to <file>_compare.png
    #[clap(short, long)]
    pub compare: bool,

    /// Run on a single thread
    #[clap(long)]
    pub sequential: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let filter = MedianFilter::new(args.kernel_size)?.parallel(!args.sequential);

    let decoded = image::open(&args.file)
        .with_context(|| format!("failed to open {}", args.file.display()))?;
    let (src, color) = to_array(decoded)?;
    let (rows, cols, channels) = src.dim();
    log::debug!("loaded {}x{} image with {} channels", cols, rows, channels);

    let mut dst = Array3::<u8>::zeros(src.dim());

    let start = Instant::now();
    filter.apply(src.view(), dst.view_mut())?;
    let elapsed = start.elapsed();
    log::info!(
        "{} time: {} milliseconds",
        if filter.is_parallel() { "parallel CPU" } else { "sequential CPU" },
        elapsed.as_millis()
    );

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| sibling(&args.file, "median"));

    if args.compare {
        let canvas = side_by_side(src.view(), dst.view())?;
        save(&sibling(&args.file, "compare"), canvas, color)?;
    }
    save(&output, dst, color)?;

    Ok(())
}

/// Decode into a (height, width, channels) array, keeping the channel layout.
fn to_array(img: DynamicImage) -> Result<(Array3<u8>, ColorType)> {
    let (width, height) = (img.width() as usize, img.height() as usize);

    let (data, color) = match img.color().channel_count() {
        1 => (img.into_luma8().into_raw(), ColorType::L8),
        2 => (img.into_luma_alpha8().into_raw(), ColorType::La8),
        3 => (img.into_rgb8().into_raw(), ColorType::Rgb8),
        _ => (img.into_rgba8().into_raw(), ColorType::Rgba8),
    };

    let channels = color.channel_count() as usize;
    Ok((from_interleaved(data, height, width, channels)?, color))
}

fn save(path: &Path, image: Array3<u8>, color: ColorType) -> Result<()> {
    let (rows, cols, _) = image.dim();
    image::save_buffer(path, &into_interleaved(image), cols as u32, rows as u32, color)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

/// `dir/name.ext` -> `dir/name_<suffix>.png`
fn sibling(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{}_{}.png", stem, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_sibling_path() {
        let path = sibling(Path::new("images/Lenna_noisy.jpg"), "median");
        assert_eq!(path, PathBuf::from("images/Lenna_noisy_median.png"));
    }

    #[test]
    fn test_to_array_keeps_rgb_layout() {
        let mut img = RgbImage::new(4, 2);
        img.put_pixel(3, 1, Rgb([10, 20, 30]));

        let (array, color) = to_array(DynamicImage::ImageRgb8(img)).unwrap();

        assert_eq!(color, ColorType::Rgb8);
        assert_eq!(array.dim(), (2, 4, 3));
        assert_eq!(array[[1, 3, 0]], 10);
        assert_eq!(array[[1, 3, 2]], 30);
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["median-filter", "noisy.png"]);
        assert_eq!(args.kernel_size, 3);
        assert!(args.output.is_none());
        assert!(!args.compare);
        assert!(!args.sequential);

        let args = Args::parse_from(["median-filter", "noisy.png", "-k", "5", "--sequential"]);
        assert_eq!(args.kernel_size, 5);
        assert!(args.sequential);
    }
}

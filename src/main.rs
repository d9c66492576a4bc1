use clap::Parser;
use shrinkcopy::imaging::{CopyConfig, RustBackend, create_copy};
use shrinkcopy::output;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shrinkcopy")]
#[command(about = "Write a 20%-scale JPEG copy of an image")]
#[command(long_about = "\
Write a 20%-scale, metadata-stripped JPEG copy of an image

Decodes the input, flattens it to plain RGB (dropping any alpha channel and
any embedded metadata such as EXIF or ICC profiles), resamples it to 20% of
its original dimensions with a Lanczos filter, and writes a quality-95 JPEG
next to the source:

  shrinkcopy photo.png        # writes photo_copy.jpg

Any format the compiled-in decoders recognize is accepted (JPEG, PNG, TIFF,
WebP — detected from content, not the extension). The output is always JPEG.")]
#[command(version)]
struct Cli {
    /// Image file to shrink
    input: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let backend = RustBackend::new();
    let report = create_copy(&backend, &cli.input, &CopyConfig::default())?;
    output::print_copy_report(&report);

    Ok(())
}

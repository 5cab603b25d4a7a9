use clap::Parser;
use flexi_logger::Logger;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use themestyles::images::relocate_content_images;
use themestyles::swatch::PngSwatchEncoder;
use themestyles::{build_css_files, compose_editor_backgrounds, print};

const PREVIEW_CSS: &str = "editor-preview.css";

/// Derives print, editor and custom stylesheets from a theme stylesheet.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Theme stylesheet to convert
    input: PathBuf,

    /// Directory the stylesheets are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Also write the editor preview stylesheet with layered backgrounds
    #[arg(long)]
    preview: bool,

    /// Point `url('images/...')` references at the template content images
    #[arg(long)]
    relocate_images: bool,

    /// Log specification, used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let _logger = Logger::try_with_env_or_str(&args.log_level)?.start()?;

    let start_instant = Instant::now();

    let mut content = fs::read_to_string(&args.input)?;
    if args.relocate_images {
        content = relocate_content_images(&content);
    }

    log::info!("Read {} ({} bytes)", args.input.display(), content.len());

    fs::create_dir_all(&args.out_dir)?;

    for (file_name, css) in build_css_files(&content).iter() {
        fs::write(args.out_dir.join(file_name), css)?;
        log::info!("Wrote {}", file_name);
    }

    if args.preview {
        let preview = compose_editor_backgrounds(&content, &PngSwatchEncoder);
        fs::write(args.out_dir.join(PREVIEW_CSS), print(&preview))?;
        log::info!("Wrote {}", PREVIEW_CSS);
    }

    log::info!("Conversion took {:.2?}.", start_instant.elapsed());

    Ok(())
}

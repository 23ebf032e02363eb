use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use imgscheme::cli::Args;
use imgscheme::formats;
use imgscheme::pipeline::distinct::BrightnessBand;
use imgscheme::pipeline::sample::load_and_sample;
use imgscheme::pipeline::select::select_palette;
use imgscheme::tui;

fn main() -> Result<()> {
    let args = Args::parse();

    let samples = load_and_sample(&args.image)?;
    if args.verbose {
        eprintln!(
            "sampled {} pixels from {}",
            samples.len(),
            args.image.display()
        );
    }

    let band = BrightnessBand::new(args.min_brightness, args.max_brightness);
    let selection = select_palette(&samples, args.threshold, band, args.dedup)?;
    if args.verbose {
        eprintln!(
            "palette complete after {} relaxation rounds",
            selection.rounds
        );
    }

    if args.preview {
        tui::run(&selection.palette)?;
    }

    match formats::lookup(&args.format) {
        Some(format) => {
            let rendered = (format.render)(&selection.palette);
            match &args.output {
                Some(path) => fs::write(path, rendered)
                    .with_context(|| format!("failed to write palette to {}", path.display()))?,
                None => print!("{rendered}"),
            }
        }
        None => eprintln!(
            "did not recognise format '{}'; supported formats: {}",
            args.format,
            formats::supported_names()
        ),
    }

    Ok(())
}

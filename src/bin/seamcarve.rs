use seamcarve::io::{decode, encode, save_energy, save_seams};
use seamcarve::{calculate_energy, parse_dimension, seamcarve, CarveError, TargetSize};

extern crate clap;

use clap::{App, Arg, ArgMatches};
use log::info;
use std::process;

// An omitted dimension is the same as asking for more than the image
// has: that axis is left alone.
fn target_dimension(matches: &ArgMatches, axis: &'static str) -> Result<u32, CarveError> {
    matches
        .value_of(axis)
        .map_or(Ok(u32::MAX), |v| parse_dimension(axis, v))
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let target = TargetSize {
        width: target_dimension(matches, "width")?,
        height: target_dimension(matches, "height")?,
    };

    // Both are required, so clap has already checked they are present.
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let image = decode(input)?;
    info!("read {} ({}x{})", input, image.width, image.height);

    if let Some(path) = matches.value_of("energy") {
        save_energy(&calculate_energy(&image), path)?;
    }

    let carving = seamcarve(&image, target);
    encode(&carving.image, output)?;
    info!(
        "wrote {} ({}x{})",
        output, carving.image.width, carving.image.height
    );

    if let Some(path) = matches.value_of("seams") {
        save_seams(&image, &carving.seams, path)?;
        info!("wrote {} seams to {}", carving.seams.len(), path);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to resize")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the resized image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .allow_hyphen_values(true)
                .value_name("PIXELS")
                .help("Target width; wider than the image leaves the width alone"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .allow_hyphen_values(true)
                .value_name("PIXELS")
                .help("Target height; taller than the image leaves the height alone"),
        )
        .arg(
            Arg::with_name("seams")
                .long("seams")
                .takes_value(true)
                .value_name("FILE")
                .help("Also write the original image with every removed seam in red"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .takes_value(true)
                .value_name("FILE")
                .help("Also write the energy map of the original image"),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("seamcarve: {}", err);
        process::exit(1);
    }
}

use std::error::Error;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use appiconset::{
    ensure_output_dir, find_source_image, write_icon, SourceImage, ICON_CATALOG,
};

/// Where the generated icons land, relative to the current directory.
const OUTPUT_DIR: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";

fn main() {
    println!("iOS App Icon Generator");
    println!("{}", "=".repeat(40));

    if let Err(err) = run() {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let source_name = match find_source_image(Path::new("."))? {
        Some(name) => name,
        None => {
            println!("No source image found!");
            println!("Place a source image (PNG, JPG, etc.) in this directory.");
            println!("Recommended size: 1024x1024 pixels or larger.");
            return Ok(());
        }
    };

    println!("Source image found: {}", source_name.display());
    println!("Output directory: {OUTPUT_DIR}");
    println!();

    if !confirm("Proceed with generating icons?")? {
        println!("Operation cancelled.");
        return Ok(());
    }

    match generate(&source_name, Path::new(OUTPUT_DIR)) {
        Ok(()) => {
            println!();
            println!("Success! Your iOS app icons have been generated.");
            println!("You can now build your iOS app with the new icons.");
            Ok(())
        }
        Err(err) => {
            eprintln!("Error generating icons: {err}");
            Err("failed to generate icons".into())
        }
    }
}

/// Decodes the source image and writes every icon in the catalog,
/// reporting each file as it is generated.
fn generate(source_name: &Path, output_dir: &Path) -> Result<(), appiconset::Error> {
    let source = SourceImage::open(source_name)?;
    println!("Source image: {}", source.path().display());
    println!("Original size: {}x{}", source.width(), source.height());
    println!("Color type: {:?}", source.color_type());
    println!();

    ensure_output_dir(output_dir)?;
    for spec in &ICON_CATALOG {
        write_icon(&source, spec, output_dir)?;
        let pixel_size = spec.pixel_size();
        println!("Generated: {} ({}x{}px)", spec.file_name, pixel_size, pixel_size);
    }

    println!();
    println!("All icons generated successfully in: {}", output_dir.display());
    Ok(())
}

/// Asks a yes/no question on the console and reads one line of input.
fn confirm(question: &str) -> io::Result<bool> {
    print!("{question} (y/N): ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

/// Only an explicit yes confirms; anything else declines.
fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

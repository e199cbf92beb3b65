use anyhow::{Context, Result};
use lvgl_image_codec::{
    inspect_file, AlphaMode, AssetNames, Conversion, ConversionReport, EmitOptions,
};
use std::path::Path;

pub fn convert_screen(
    theme: &str,
    screen: &str,
    input: &Path,
    out_dir: &Path,
    alpha: AlphaMode,
    include: String,
) -> Result<()> {
    let output = out_dir.join(AssetNames::screen_file_name(screen));
    println!("Converting {:?} ({} / {})...", input, theme, screen);

    let report = Conversion::new(AssetNames::for_screen(theme, screen))
        .with_alpha(alpha)
        .with_emit_options(EmitOptions { include })
        .convert_file(input, &output)
        .with_context(|| format!("Failed to convert {:?}", input))?;

    print_report(&report);
    Ok(())
}

pub fn convert_file(input: &Path, output: &Path, alpha: AlphaMode, include: String) -> Result<()> {
    println!("Converting {:?}...", input);

    let report = Conversion::new(AssetNames::from_output_path(output))
        .with_alpha(alpha)
        .with_emit_options(EmitOptions { include })
        .convert_file(input, output)
        .with_context(|| format!("Failed to convert {:?}", input))?;

    print_report(&report);
    Ok(())
}

pub fn show_info(input: &Path, alpha: AlphaMode) -> Result<()> {
    let encoded = inspect_file(input, alpha)
        .with_context(|| format!("Failed to read image {:?}", input))?;
    let desc = &encoded.descriptor;

    println!("Image Information:");
    println!("  Dimensions: {}×{}", desc.width, desc.height);
    println!("  Format: {}", desc.format.tag());
    println!("  Bytes per pixel: {}", desc.format.bytes_per_pixel());
    println!("  Data size: {} bytes", desc.data_size);
    println!("  Checksum: 0x{:04X}", encoded.checksum());
    Ok(())
}

fn print_report(report: &ConversionReport) {
    let desc = &report.descriptor;
    println!("Conversion complete! Output saved to: {:?}", report.output);
    println!("  Symbol: {}", report.symbol);
    println!("  Dimensions: {}×{}", desc.width, desc.height);
    println!("  Format: {}", desc.format.tag());
    println!("  Data size: {} bytes", desc.data_size);
    println!("  Checksum: 0x{:04X}", report.checksum);
}

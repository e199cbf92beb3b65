use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use lvgl_image_codec::AlphaMode;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{convert_file, convert_screen, show_info};

#[derive(Parser)]
#[command(name = "png2lvgl")]
#[command(about = "Convert PNG images to LVGL RGB565 C sources")]
#[command(version)]
struct Cli {
    /// Log each conversion stage
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a themed screen image; symbols are ui_img_<theme>_<screen>_png
    Screen {
        /// Theme name
        #[arg(short, long)]
        theme: String,
        /// Screen name
        #[arg(short, long)]
        screen: String,
        /// Input image path
        #[arg(short, long)]
        input: PathBuf,
        /// Directory for ui_img_<screen>_png.c
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
        #[command(flatten)]
        format: FormatArgs,
    },
    /// Convert an image; symbols are taken from the output file name
    File {
        /// Input image path
        #[arg(short, long)]
        input: PathBuf,
        /// Output C file path
        #[arg(short, long)]
        output: PathBuf,
        #[command(flatten)]
        format: FormatArgs,
    },
    /// Show what a conversion would produce without writing it
    Info {
        /// Input image path
        #[arg(short, long)]
        input: PathBuf,
        /// Alpha channel handling
        #[arg(short, long, value_enum, default_value_t = AlphaArg::Auto)]
        alpha: AlphaArg,
    },
}

#[derive(clap::Args)]
struct FormatArgs {
    /// Alpha channel handling
    #[arg(short, long, value_enum, default_value_t = AlphaArg::Auto)]
    alpha: AlphaArg,
    /// Header included at the top of the generated file
    #[arg(long, default_value = "ui.h")]
    include: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlphaArg {
    /// Keep alpha only if the image has it
    Auto,
    /// Always emit an alpha byte
    Force,
    /// Never emit an alpha byte
    Strip,
}

impl From<AlphaArg> for AlphaMode {
    fn from(arg: AlphaArg) -> Self {
        match arg {
            AlphaArg::Auto => AlphaMode::Auto,
            AlphaArg::Force => AlphaMode::Force,
            AlphaArg::Strip => AlphaMode::Strip,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Screen {
            theme,
            screen,
            input,
            out_dir,
            format,
        } => convert_screen(
            &theme,
            &screen,
            &input,
            &out_dir,
            format.alpha.into(),
            format.include,
        )?,

        Commands::File {
            input,
            output,
            format,
        } => convert_file(&input, &output, format.alpha.into(), format.include)?,

        Commands::Info { input, alpha } => show_info(&input, alpha.into())?,
    }

    Ok(())
}

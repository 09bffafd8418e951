//! Last Light Odyssey audio generation CLI.
//!
//! Renders the full asset catalog (or a subset) into the game's
//! `assets/audio/` tree. WAV assets are written directly; scene assets are
//! transcoded to MP3 through ffmpeg.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;
mod transcode;

/// Last Light Odyssey - procedural audio asset generator
#[derive(Parser)]
#[command(name = "lastlight-audiogen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate audio assets into the output tree
    Generate {
        /// Root directory; assets land under <out-dir>/assets/audio/
        #[arg(long, default_value = ".")]
        out_dir: String,

        /// Generate a single asset by catalog name (e.g. sfx/ui/click)
        #[arg(long, conflicts_with = "category")]
        only: Option<String>,

        /// Generate one category (music, ui, combat, alarms, movement, scenes)
        #[arg(long)]
        category: Option<String>,

        /// Base seed for deterministic rendering
        #[arg(long, default_value_t = lastlight_assets::BASE_SEED)]
        seed: u32,

        /// Keep scene assets as WAV instead of transcoding to MP3
        #[arg(long)]
        skip_mp3: bool,
    },

    /// List the asset catalog
    List {
        /// Machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            out_dir,
            only,
            category,
            seed,
            skip_mp3,
        } => commands::generate::run(
            &out_dir,
            only.as_deref(),
            category.as_deref(),
            seed,
            skip_mp3,
        ),
        Commands::List { json } => commands::list::run(json),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

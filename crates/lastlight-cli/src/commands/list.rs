//! List command: show the asset catalog.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use lastlight_assets::catalog::{self, Category, OutputKind, CATALOG};

pub fn run(json: bool) -> Result<ExitCode> {
    if json {
        run_json()
    } else {
        run_human()
    }
    Ok(ExitCode::SUCCESS)
}

fn run_human() {
    for &category in Category::all() {
        println!("{}", format!("[{}]", category.as_str().to_uppercase()).bold());
        for asset in catalog::by_category(category) {
            let format = match asset.output {
                OutputKind::Wav => "wav",
                OutputKind::Mp3 => "mp3",
            };
            println!(
                "  {}  {} {}",
                asset.name,
                format!("{} Hz", asset.sample_rate).dimmed(),
                format.dimmed()
            );
        }
        println!();
    }
    println!("{} assets total", CATALOG.len());
}

fn run_json() {
    let assets: Vec<_> = CATALOG
        .iter()
        .map(|asset| {
            serde_json::json!({
                "name": asset.name,
                "file": asset.file_name(),
                "category": asset.category.as_str(),
                "sample_rate": asset.sample_rate,
                "format": asset.output.extension(),
            })
        })
        .collect();
    let doc = serde_json::json!({ "assets": assets, "count": CATALOG.len() });
    println!("{}", serde_json::to_string_pretty(&doc).unwrap_or_default());
}

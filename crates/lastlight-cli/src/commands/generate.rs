//! Generate command: render assets into the output tree.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use lastlight_assets::catalog::{self, AssetSpec, Category, OutputKind, CATALOG};

use crate::transcode;

pub fn run(
    out_dir: &str,
    only: Option<&str>,
    category: Option<&str>,
    seed: u32,
    skip_mp3: bool,
) -> Result<ExitCode> {
    let start = Instant::now();
    let selection = select(only, category)?;
    let audio_root = Path::new(out_dir).join("assets").join("audio");

    // Resolve ffmpeg up front so a missing binary fails before any work.
    let needs_ffmpeg =
        !skip_mp3 && selection.iter().any(|a| a.output == OutputKind::Mp3);
    let ffmpeg = if needs_ffmpeg {
        Some(transcode::find_ffmpeg()?)
    } else {
        None
    };

    println!("{} {}", "Output root:".cyan().bold(), audio_root.display());
    println!("{} {}", "Base seed:".cyan().bold(), seed);

    let mut last_category = None;
    for asset in &selection {
        if last_category != Some(asset.category) {
            println!("\n{}", format!("[{}]", asset.category.as_str().to_uppercase()).bold());
            last_category = Some(asset.category);
        }
        write_asset(asset, &audio_root, seed, skip_mp3, ffmpeg.as_deref())?;
    }

    println!(
        "\n{} {} assets in {:.1}s",
        "Generated".green().bold(),
        selection.len(),
        start.elapsed().as_secs_f64()
    );
    Ok(ExitCode::SUCCESS)
}

fn select(only: Option<&str>, category: Option<&str>) -> Result<Vec<&'static AssetSpec>> {
    if let Some(name) = only {
        let asset = catalog::find(name)
            .with_context(|| format!("no asset named '{}' (see `list`)", name))?;
        return Ok(vec![asset]);
    }
    if let Some(name) = category {
        let Some(cat) = Category::parse(name) else {
            bail!(
                "unknown category '{}' (expected music, ui, combat, alarms, movement, or scenes)",
                name
            );
        };
        return Ok(catalog::by_category(cat).collect());
    }
    Ok(CATALOG.iter().collect())
}

fn write_asset(
    asset: &AssetSpec,
    audio_root: &Path,
    seed: u32,
    skip_mp3: bool,
    ffmpeg: Option<&Path>,
) -> Result<()> {
    let result = asset.render(seed);

    let final_path = audio_root.join(asset.file_name());
    if let Some(parent) = final_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    match asset.output {
        OutputKind::Wav => {
            result
                .write_to_file(&final_path)
                .with_context(|| format!("failed to write {}", final_path.display()))?;
        }
        OutputKind::Mp3 if skip_mp3 => {
            let wav_path = final_path.with_extension("wav");
            result
                .write_to_file(&wav_path)
                .with_context(|| format!("failed to write {}", wav_path.display()))?;
        }
        OutputKind::Mp3 => {
            let wav_path = intermediate_wav_path(&final_path);
            result
                .write_to_file(&wav_path)
                .with_context(|| format!("failed to write {}", wav_path.display()))?;
            let ffmpeg = ffmpeg.context("ffmpeg path missing for mp3 output")?;
            transcode::wav_to_mp3(ffmpeg, &wav_path, &final_path)?;
        }
    }

    println!(
        "  {} {} ({:.2}s, {})",
        "+".green(),
        asset.file_name(),
        result.duration_seconds(),
        &result.pcm_hash[..12].dimmed()
    );
    Ok(())
}

fn intermediate_wav_path(mp3_path: &Path) -> PathBuf {
    mp3_path.with_extension("wav")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_select_all_by_default() {
        assert_eq!(select(None, None).unwrap().len(), CATALOG.len());
    }

    #[test]
    fn test_select_single_asset() {
        let sel = select(Some("sfx/ui/click"), None).unwrap();
        assert_eq!(sel.len(), 1);
        assert_eq!(sel[0].name, "sfx/ui/click");
    }

    #[test]
    fn test_select_category() {
        let sel = select(None, Some("ui")).unwrap();
        assert_eq!(sel.len(), 6);
        assert!(sel.iter().all(|a| a.category == Category::Ui));
    }

    #[test]
    fn test_select_rejects_unknown_names() {
        assert!(select(Some("sfx/ui/nope"), None).is_err());
        assert!(select(None, Some("weather")).is_err());
    }

    #[test]
    fn test_intermediate_wav_path() {
        let mp3 = Path::new("out/sfx/scenes/common_scene/beam.mp3");
        assert_eq!(
            intermediate_wav_path(mp3),
            Path::new("out/sfx/scenes/common_scene/beam.wav")
        );
    }
}

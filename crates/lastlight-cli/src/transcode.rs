//! WAV-to-MP3 transcoding through the system ffmpeg.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};

/// Locates ffmpeg on PATH. Scene assets cannot be produced without it.
pub fn find_ffmpeg() -> Result<PathBuf> {
    which::which("ffmpeg").context(
        "ffmpeg not found on PATH; install it or pass --skip-mp3 to keep scene assets as WAV",
    )
}

/// Transcodes a WAV file to MP3 at 192 kbps and removes the intermediate.
pub fn wav_to_mp3(ffmpeg: &Path, wav_path: &Path, mp3_path: &Path) -> Result<()> {
    let output = Command::new(ffmpeg)
        .arg("-y")
        .arg("-i")
        .arg(wav_path)
        .args(["-codec:a", "libmp3lame", "-b:a", "192k", "-ar", "44100"])
        .arg(mp3_path)
        .output()
        .with_context(|| format!("failed to run ffmpeg for {}", mp3_path.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "ffmpeg failed for {} ({}):\n{}",
            mp3_path.display(),
            output.status,
            stderr.trim()
        );
    }

    std::fs::remove_file(wav_path)
        .with_context(|| format!("failed to remove intermediate {}", wav_path.display()))?;
    Ok(())
}

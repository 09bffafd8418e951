//! The asset catalog: every shipped audio file, its composer, and its
//! output contract.
//!
//! Asset names are path-shaped and double as both the output location
//! under `assets/audio/` and the seed-derivation key, so they must stay
//! stable once a build has shipped.

use lastlight_audio::mixer::MixerOutput;
use lastlight_audio::rng::create_asset_rng;
use lastlight_audio::wav::WavResult;
use rand_pcg::Pcg32;

use crate::{alarms, combat, movement, music, scenes, ui};

/// Base seed shared by every asset.
pub const BASE_SEED: u32 = 42;

/// Sample rate for music and tactical SFX.
pub const GAME_SAMPLE_RATE: u32 = 22050;

/// Sample rate for scene SFX.
pub const SCENE_SAMPLE_RATE: u32 = 44100;

/// Quantization gain for the scene set; mastered hotter than the game set.
pub const SCENE_QUANTIZE_GAIN: f64 = 0.95;

/// Asset category, mirroring the output directory layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Music,
    Ui,
    Combat,
    Alarms,
    Movement,
    Scenes,
}

impl Category {
    /// Lowercase name as used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Music => "music",
            Category::Ui => "ui",
            Category::Combat => "combat",
            Category::Alarms => "alarms",
            Category::Movement => "movement",
            Category::Scenes => "scenes",
        }
    }

    /// Parses a category name; `None` for unknown names.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "music" => Some(Category::Music),
            "ui" => Some(Category::Ui),
            "combat" => Some(Category::Combat),
            "alarms" => Some(Category::Alarms),
            "movement" => Some(Category::Movement),
            "scenes" => Some(Category::Scenes),
            _ => None,
        }
    }

    /// All categories in catalog order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Music,
            Category::Ui,
            Category::Combat,
            Category::Alarms,
            Category::Movement,
            Category::Scenes,
        ]
    }
}

/// Final container format for an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// 16-bit PCM WAV, written directly.
    Wav,
    /// Rendered to WAV, then transcoded to MP3 at 192 kbps.
    Mp3,
}

impl OutputKind {
    /// File extension for the final asset.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputKind::Wav => "wav",
            OutputKind::Mp3 => "mp3",
        }
    }
}

type ComposeFn = fn(&mut Pcg32) -> MixerOutput;

/// One entry in the asset catalog.
pub struct AssetSpec {
    /// Unique path-shaped name, e.g. `sfx/ui/click`.
    pub name: &'static str,
    pub category: Category,
    pub sample_rate: u32,
    pub output: OutputKind,
    /// Gain applied at 16-bit quantization time.
    pub quantize_gain: f64,
    compose: ComposeFn,
}

impl AssetSpec {
    /// Output path relative to `assets/audio/`, with extension.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.output.extension())
    }

    /// Renders this asset deterministically from the base seed.
    pub fn render(&self, base_seed: u32) -> WavResult {
        let mut rng = create_asset_rng(base_seed, self.name);
        let output = (self.compose)(&mut rng);
        WavResult::from_output(&output, self.sample_rate, self.quantize_gain)
    }
}

const fn game_wav(name: &'static str, category: Category, compose: ComposeFn) -> AssetSpec {
    AssetSpec {
        name,
        category,
        sample_rate: GAME_SAMPLE_RATE,
        output: OutputKind::Wav,
        quantize_gain: 1.0,
        compose,
    }
}

const fn scene_mp3(name: &'static str, compose: ComposeFn) -> AssetSpec {
    AssetSpec {
        name,
        category: Category::Scenes,
        sample_rate: SCENE_SAMPLE_RATE,
        output: OutputKind::Mp3,
        quantize_gain: SCENE_QUANTIZE_GAIN,
        compose,
    }
}

/// Every asset the game ships, in generation order.
pub static CATALOG: &[AssetSpec] = &[
    // Music loops
    game_wav("music/title_ambient", Category::Music, music::title_ambient),
    game_wav("music/management_ambient", Category::Music, music::management_ambient),
    game_wav("music/combat_ambient", Category::Music, music::combat_ambient),
    // UI
    game_wav("sfx/ui/click", Category::Ui, ui::click),
    game_wav("sfx/ui/hover", Category::Ui, ui::hover),
    game_wav("sfx/ui/dialog_open", Category::Ui, ui::dialog_open),
    game_wav("sfx/ui/dialog_close", Category::Ui, ui::dialog_close),
    game_wav("sfx/ui/end_turn", Category::Ui, ui::end_turn),
    game_wav("sfx/ui/transition", Category::Ui, ui::transition),
    // Combat
    game_wav("sfx/combat/fire", Category::Combat, combat::fire),
    game_wav("sfx/combat/hit", Category::Combat, combat::hit),
    game_wav("sfx/combat/miss", Category::Combat, combat::miss),
    game_wav("sfx/combat/overwatch", Category::Combat, combat::overwatch),
    game_wav("sfx/combat/turret_fire", Category::Combat, combat::turret_fire),
    game_wav("sfx/combat/heal", Category::Combat, combat::heal),
    game_wav("sfx/combat/charge", Category::Combat, combat::charge),
    game_wav("sfx/combat/execute", Category::Combat, combat::execute),
    game_wav("sfx/combat/precision", Category::Combat, combat::precision),
    game_wav("sfx/combat/damage", Category::Combat, combat::damage),
    game_wav("sfx/combat/death", Category::Combat, combat::death),
    game_wav("sfx/combat/enemy_alert", Category::Combat, combat::enemy_alert),
    // Alarms
    game_wav("sfx/alarms/cryo_alarm", Category::Alarms, alarms::cryo_alarm),
    game_wav("sfx/alarms/game_over", Category::Alarms, alarms::game_over),
    game_wav("sfx/alarms/victory", Category::Alarms, alarms::victory),
    // Movement
    game_wav("sfx/movement/footstep", Category::Movement, movement::footstep),
    game_wav("sfx/movement/extraction_beam", Category::Movement, movement::extraction_beam),
    game_wav("sfx/movement/jump_warp", Category::Movement, movement::jump_warp),
    // Common scenes
    scene_mp3("sfx/scenes/common_scene/beam", scenes::beam),
    scene_mp3("sfx/scenes/common_scene/extraction_complete", scenes::extraction_complete),
    scene_mp3("sfx/scenes/common_scene/extraction_failed", scenes::extraction_failed),
    scene_mp3("sfx/scenes/common_scene/outpost_arrival", scenes::outpost_arrival),
    scene_mp3("sfx/scenes/common_scene/voyage_failure", scenes::voyage_failure),
    // Event scenes
    scene_mp3("sfx/scenes/event_scene/solar_flare", scenes::solar_flare),
    scene_mp3("sfx/scenes/event_scene/meteor_shower", scenes::meteor_shower),
    scene_mp3("sfx/scenes/event_scene/disease_outbreak", scenes::disease_outbreak),
    scene_mp3("sfx/scenes/event_scene/system_malfunction", scenes::system_malfunction),
    scene_mp3("sfx/scenes/event_scene/pirate_ambush", scenes::pirate_ambush),
    scene_mp3("sfx/scenes/event_scene/space_debris", scenes::space_debris),
    scene_mp3("sfx/scenes/event_scene/sensor_ghost", scenes::sensor_ghost),
    scene_mp3("sfx/scenes/event_scene/radiation_storm", scenes::radiation_storm),
    scene_mp3("sfx/scenes/event_scene/cryo_failure", scenes::cryo_failure),
    scene_mp3("sfx/scenes/event_scene/clear_skies", scenes::clear_skies),
    // Colonist loss milestones
    scene_mp3("sfx/scenes/colonist_loss_scene/casualties_mount", scenes::casualties_mount),
    scene_mp3("sfx/scenes/colonist_loss_scene/weight_of_command", scenes::weight_of_command),
    scene_mp3("sfx/scenes/colonist_loss_scene/desperation", scenes::desperation),
    scene_mp3("sfx/scenes/colonist_loss_scene/all_hope_lost", scenes::all_hope_lost),
    scene_mp3("sfx/scenes/colonist_loss_scene/extinction", scenes::extinction),
    // Mission scenes
    scene_mp3("sfx/scenes/mission_scene/mission_station", scenes::mission_station),
    scene_mp3("sfx/scenes/mission_scene/mission_asteroid", scenes::mission_asteroid),
    scene_mp3("sfx/scenes/mission_scene/mission_planet", scenes::mission_planet),
    // Objective / elimination
    scene_mp3("sfx/scenes/objective_complete_scene/objective_complete", scenes::objective_complete),
    scene_mp3("sfx/scenes/enemy_elimination_scene/all_hostiles_eliminated", scenes::all_hostiles_eliminated),
    // New Earth arrival
    scene_mp3("sfx/scenes/new_earth_scene/arrival_perfect", scenes::arrival_perfect),
    scene_mp3("sfx/scenes/new_earth_scene/arrival_good", scenes::arrival_good),
    scene_mp3("sfx/scenes/new_earth_scene/arrival_bad", scenes::arrival_bad),
    // Game over
    scene_mp3("sfx/scenes/game_over_scene/extinction", scenes::game_over_extinction),
    scene_mp3("sfx/scenes/game_over_scene/ship_destroyed", scenes::ship_destroyed),
    scene_mp3("sfx/scenes/game_over_scene/captain_died", scenes::captain_died),
    // Voyage intro
    scene_mp3("sfx/scenes/voyage_intro_scene/voyage_intro", scenes::voyage_intro),
];

/// Looks up an asset by its catalog name.
pub fn find(name: &str) -> Option<&'static AssetSpec> {
    CATALOG.iter().find(|a| a.name == name)
}

/// All assets in a category, in catalog order.
pub fn by_category(category: Category) -> impl Iterator<Item = &'static AssetSpec> {
    CATALOG.iter().filter(move |a| a.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size_and_split() {
        assert_eq!(CATALOG.len(), 59);
        let wavs = CATALOG.iter().filter(|a| a.output == OutputKind::Wav).count();
        let mp3s = CATALOG.iter().filter(|a| a.output == OutputKind::Mp3).count();
        assert_eq!(wavs, 27);
        assert_eq!(mp3s, 32);
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = CATALOG.iter().map(|a| a.name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn test_sample_rates_follow_output_kind() {
        for asset in CATALOG {
            match asset.output {
                OutputKind::Wav => {
                    assert_eq!(asset.sample_rate, GAME_SAMPLE_RATE, "{}", asset.name);
                    assert_eq!(asset.quantize_gain, 1.0);
                }
                OutputKind::Mp3 => {
                    assert_eq!(asset.sample_rate, SCENE_SAMPLE_RATE, "{}", asset.name);
                    assert_eq!(asset.quantize_gain, SCENE_QUANTIZE_GAIN);
                }
            }
        }
    }

    #[test]
    fn test_find_and_file_name() {
        let click = find("sfx/ui/click").unwrap();
        assert_eq!(click.file_name(), "sfx/ui/click.wav");
        assert_eq!(click.category, Category::Ui);

        let beam = find("sfx/scenes/common_scene/beam").unwrap();
        assert_eq!(beam.file_name(), "sfx/scenes/common_scene/beam.mp3");

        assert!(find("sfx/ui/missing").is_none());
    }

    #[test]
    fn test_category_round_trip() {
        for &cat in Category::all() {
            assert_eq!(Category::parse(cat.as_str()), Some(cat));
        }
        assert_eq!(Category::parse("weather"), None);
    }

    #[test]
    fn test_by_category_counts() {
        assert_eq!(by_category(Category::Music).count(), 3);
        assert_eq!(by_category(Category::Ui).count(), 6);
        assert_eq!(by_category(Category::Combat).count(), 12);
        assert_eq!(by_category(Category::Alarms).count(), 3);
        assert_eq!(by_category(Category::Movement).count(), 3);
        assert_eq!(by_category(Category::Scenes).count(), 32);
    }
}

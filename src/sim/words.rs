/// Word pools: themed word sets and per-round sampling.
///
/// ## Sources (priority order):
///   1. External theme file (`themes_file` in config, TOML format)
///   2. Built-in embedded themes
///
/// ## Theme file format:
///   ```toml
///   [[theme]]
///   name = "Herbs"
///   words = ["BASIL", "THYME", "ROSEMARY"]
///   ```
///
/// The round sampler normalizes to uppercase, drops duplicates and words
/// longer than the grid, then keeps a random subset of at most
/// `max_words`. Length filtering here means the placement engine only
/// ever drops words for attempt exhaustion.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::collections::HashSet;

use crate::config::GameConfig;

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: String,
    pub words: Vec<String>,
}

// ── External theme file schema ──

#[derive(Deserialize, Debug)]
struct ThemesFile {
    #[serde(default)]
    theme: Vec<ThemeDef>,
}

#[derive(Deserialize, Debug)]
struct ThemeDef {
    name: String,
    words: Vec<String>,
}

// ── Loading ──

/// Load themes: the config's external file when present and parseable,
/// otherwise the built-ins. Runs before the terminal goes raw, so
/// warnings go to stderr like the rest of startup.
pub fn load_themes(config: &GameConfig) -> Vec<Theme> {
    if let Some(path) = &config.themes_file {
        match std::fs::read_to_string(path) {
            Ok(text) => match toml::from_str::<ThemesFile>(&text) {
                Ok(file) if !file.theme.is_empty() => {
                    return file
                        .theme
                        .into_iter()
                        .map(|t| Theme { name: t.name, words: t.words })
                        .collect();
                }
                Ok(_) => {
                    eprintln!("Warning: {} contains no themes, using built-ins.", path.display());
                }
                Err(e) => {
                    eprintln!("Warning: theme file parse error: {e}");
                    eprintln!("Using built-in themes.");
                }
            },
            Err(e) => {
                eprintln!("Warning: could not read {}: {e}", path.display());
            }
        }
    }
    builtin_themes()
}

/// Pick a random theme and sample this round's word list from it.
/// Returns the theme name and the normalized, length-filtered words.
pub fn sample_round(
    themes: &[Theme],
    config: &GameConfig,
    rng: &mut impl Rng,
) -> Option<(String, Vec<String>)> {
    if themes.is_empty() {
        return None;
    }
    let theme = &themes[rng.random_range(0..themes.len())];

    let mut seen: HashSet<String> = HashSet::new();
    let mut words: Vec<String> = theme
        .words
        .iter()
        .map(|w| w.trim().to_uppercase())
        .filter(|w| {
            let len = w.chars().count();
            len >= 2 && len <= config.grid_size && seen.insert(w.clone())
        })
        .collect();

    words.shuffle(rng);
    words.truncate(config.max_words);
    Some((theme.name.clone(), words))
}

// ── Built-in themes ──

pub fn builtin_themes() -> Vec<Theme> {
    fn theme(name: &str, words: &[&str]) -> Theme {
        Theme {
            name: name.to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    vec![
        theme("Animals", &[
            "BADGER", "OTTER", "FALCON", "WEASEL", "MARMOT", "HERON",
            "LYNX", "MOOSE", "RAVEN", "VIPER", "STOAT", "BISON",
        ]),
        theme("Kitchen", &[
            "SKILLET", "WHISK", "LADLE", "GRATER", "KETTLE", "SPATULA",
            "COLANDER", "TONGS", "PESTLE", "SAUCEPAN", "PEELER", "TRIVET",
        ]),
        theme("Weather", &[
            "DRIZZLE", "THUNDER", "BREEZE", "CYCLONE", "FROST", "MONSOON",
            "SLEET", "GALE", "HUMIDITY", "OVERCAST", "SQUALL", "HAIL",
        ]),
        theme("Space", &[
            "NEBULA", "QUASAR", "COMET", "GALAXY", "METEOR", "PULSAR",
            "ORBIT", "ECLIPSE", "ASTEROID", "PHOTON", "GRAVITY", "LUNAR",
        ]),
        theme("Music", &[
            "VIOLIN", "TEMPO", "CHORUS", "OCTAVE", "MELODY", "RHYTHM",
            "BALLAD", "CELLO", "ANTHEM", "TIMBRE", "SONATA", "REFRAIN",
        ]),
        theme("Forest", &[
            "CEDAR", "BRAMBLE", "THICKET", "WILLOW", "FUNGUS", "CANOPY",
            "LICHEN", "SAPLING", "UNDERGROWTH", "FERN", "ACORN", "MOSS",
        ]),
    ]
}

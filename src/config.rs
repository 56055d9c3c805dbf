/// External configuration loader.
///
/// Reads `config.toml` from the executable's directory (or CWD).
/// Falls back to sensible defaults if the file is missing or incomplete.

use serde::Deserialize;
use std::path::PathBuf;

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Grid dimension (grid is grid_size × grid_size).
    pub grid_size: usize,
    /// How many words to sample from a theme per round.
    pub max_words: usize,
    /// Minimum placed words required before a round may start.
    pub min_words: usize,
    /// Fixed RNG seed for reproducible rounds. None = random per run.
    pub seed: Option<u64>,
    /// Optional external theme file overriding the built-in word sets.
    pub themes_file: Option<PathBuf>,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    game: TomlGame,
}

#[derive(Deserialize, Debug)]
struct TomlGame {
    #[serde(default = "default_grid_size")]
    grid_size: usize,
    #[serde(default = "default_max_words")]
    max_words: usize,
    #[serde(default = "default_min_words")]
    min_words: usize,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    themes_file: Option<String>,
}

// ── Defaults ──

fn default_grid_size() -> usize { 12 }
fn default_max_words() -> usize { 12 }
fn default_min_words() -> usize { 4 }

impl Default for TomlGame {
    fn default() -> Self {
        TomlGame {
            grid_size: default_grid_size(),
            max_words: default_max_words(),
            min_words: default_min_words(),
            seed: None,
            themes_file: None,
        }
    }
}

// ── Loading ──

impl GameConfig {
    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// Missing file or missing keys gracefully fall back to defaults.
    pub fn load() -> Self {
        let search_dirs = candidate_dirs();
        let toml_cfg = load_toml(&search_dirs);
        GameConfig::from_toml(toml_cfg, &search_dirs)
    }

    fn from_toml(toml_cfg: TomlConfig, search_dirs: &[PathBuf]) -> Self {
        // Clamp to playable bounds rather than rejecting the file outright.
        let grid_size = toml_cfg.game.grid_size.clamp(5, 26);
        if grid_size != toml_cfg.game.grid_size {
            eprintln!(
                "Warning: grid_size {} out of range, using {}",
                toml_cfg.game.grid_size, grid_size
            );
        }
        let max_words = toml_cfg.game.max_words.max(1);
        let min_words = toml_cfg.game.min_words.clamp(1, max_words);

        // Resolve themes file relative to the search dirs.
        let themes_file = toml_cfg.game.themes_file.as_ref().map(|name| {
            let p = PathBuf::from(name);
            if p.is_absolute() {
                p
            } else {
                search_dirs
                    .iter()
                    .map(|d| d.join(name))
                    .find(|c| c.is_file())
                    .unwrap_or(p)
            }
        });

        GameConfig {
            grid_size,
            max_words,
            min_words,
            seed: toml_cfg.game.seed,
            themes_file,
        }
    }
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    // 1. Directory of the running executable
    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    // 2. Current working directory
    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    // 3. Fallback
    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

/// Search for config.toml in candidate directories.
fn load_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(text) => match toml::from_str::<TomlConfig>(&text) {
                    Ok(cfg) => return cfg,
                    Err(e) => {
                        eprintln!("Warning: config.toml parse error: {e}");
                        eprintln!("Using default settings.");
                        return TomlConfig::default();
                    }
                },
                Err(e) => {
                    eprintln!("Warning: could not read {}: {e}", path.display());
                }
            }
        }
    }
    TomlConfig::default()
}

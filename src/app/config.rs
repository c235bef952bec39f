use crate::app::cli::Cli;
use crate::app::models::FinderOptions;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, FinderOptions>,
}

/// Everything the binary needs after merging a preset with the CLI.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub root: String,
    pub options: FinderOptions,
    pub long_output: bool,
    pub sort: bool,
    pub lenient: bool,
}

fn presets_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("dirfinder").join("presets.toml"))
}

fn load_presets_file(path: &Path) -> Result<HashMap<String, FinderOptions>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read presets at {}", path.display()))?;

    parse_presets(&content)
        .with_context(|| format!("Failed to parse presets at {}", path.display()))
}

fn parse_presets(content: &str) -> Result<HashMap<String, FinderOptions>> {
    let parsed: PresetsFile = toml::from_str(content)?;
    Ok(parsed.presets)
}

fn merge_vecs(preset_vec: Vec<String>, cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined = preset_vec;
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    let mut seen = HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

fn merge(preset: FinderOptions, cli: Cli) -> RuntimeConfig {
    let options = FinderOptions {
        depth: cli.depth.or(preset.depth),
        include: merge_vecs(preset.include, cli.name),
        exclude: merge_vecs(preset.exclude, cli.not_name),
        min_size: cli.min_size.or(preset.min_size),
        max_size: cli.max_size.or(preset.max_size),
        exclude_hidden: cli.exclude_hidden || preset.exclude_hidden,
        exclude_vcs: cli.exclude_vcs || preset.exclude_vcs,
    };

    RuntimeConfig {
        root: cli.path,
        options,
        long_output: cli.long,
        sort: cli.sort,
        lenient: cli.lenient,
    }
}

pub fn resolve_config(cli: Cli) -> Result<RuntimeConfig> {
    let preset = match cli.preset.as_deref() {
        Some(name) => {
            let path = presets_path()?;
            let mut presets = load_presets_file(&path)?;
            match presets.remove(name) {
                Some(preset) => preset,
                None => bail!("Unknown preset {:?} (looked in {})", name, path.display()),
            }
        }
        None => FinderOptions::default(),
    };

    Ok(merge(preset, cli))
}

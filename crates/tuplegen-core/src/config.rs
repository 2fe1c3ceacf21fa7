//! Generation settings.
//!
//! Load order: `tuplegen.toml` → environment variables → defaults. Loading
//! does not validate: the CLI applies its own flags on top of whatever this
//! returns and calls [`TuplegenConfig::validate`] on the merged result.

use crate::emit::{ArityRange, DEFAULT_MAX_ARITY, EmitOptions, MIN_ARITY};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "tuplegen.toml";

/// Top-level tuplegen configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TuplegenConfig {
    pub arity: ArityConfig,
    pub output: OutputConfig,
    /// File the settings were read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Which tuple sizes get an impl.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArityConfig {
    /// First arity generated (inclusive).
    pub min: usize,
    /// Last arity generated (inclusive). At most 26, one letter per element.
    pub max: usize,
}

/// Shape of the emitted text.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub trait_name: String,
    /// Prepend `pub trait <trait_name> { .. }` to the impls.
    pub with_trait_definition: bool,
}

impl Default for ArityConfig {
    fn default() -> Self {
        Self {
            min: MIN_ARITY,
            max: DEFAULT_MAX_ARITY,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            trait_name: "Split".to_string(),
            with_trait_definition: false,
        }
    }
}

/// Helper to parse an env var and apply it to a config field.
/// Unparsable values are skipped with a warning.
fn env_override<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var) {
        match v.parse() {
            Ok(n) => *target = n,
            Err(_) => tracing::warn!("ignoring {}={:?}: not a valid value", var, v),
        }
    }
}

impl TuplegenConfig {
    /// Load `tuplegen.toml` from `dir`, falling back to defaults when absent.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load_file(&path)
        } else {
            Ok(Self::finish(Self::default()))
        }
    }

    /// Load an explicit config file. A missing file is an error here.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config file");
        config.source = Some(path.to_path_buf());
        Ok(Self::finish(config))
    }

    fn finish(mut config: Self) -> Self {
        env_override("TUPLEGEN_MIN_ARITY", &mut config.arity.min);
        env_override("TUPLEGEN_MAX_ARITY", &mut config.arity.max);
        env_override("TUPLEGEN_TRAIT_NAME", &mut config.output.trait_name);
        config
    }

    /// Check the range bounds and that the trait name is a usable Rust
    /// identifier (not a keyword).
    pub fn validate(&self) -> Result<()> {
        self.arity_range()?;
        if !is_identifier(&self.output.trait_name) {
            anyhow::bail!(
                "trait_name {:?} is not a valid Rust identifier",
                self.output.trait_name
            );
        }
        Ok(())
    }

    pub fn arity_range(&self) -> Result<ArityRange> {
        Ok(ArityRange::new(self.arity.min, self.arity.max)?)
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            trait_name: self.output.trait_name.clone(),
            with_trait_definition: self.output.with_trait_definition,
        }
    }
}

/// Strict and reserved keywords; none of them can name a trait.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "try",
    "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

fn is_identifier(name: &str) -> bool {
    if KEYWORDS.contains(&name) {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    name != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

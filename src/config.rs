//! Snapshot configuration.
//!
//! Every tunable of a run lives in one immutable [`SnapshotConfig`] value,
//! built once at startup and passed by reference into the walker, the
//! classifier and the excerpt reader. Nothing reads ambient global state.
//!
//! ## Layering
//!
//! ```text
//! stock defaults                     ← SnapshotConfig::default()
//!   └─ <root>/code-snapshot.toml    ← optional, sparse overrides
//!      (or --config FILE, which must exist)
//!        └─ --root / --output / --max-lines flags
//! ```
//!
//! The scan root comes from `--root` only; it is not a config-file key.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output = "code_snapshot.md"   # Where the snapshot is written
//! max_lines = 75                # Leading lines copied from each file
//!
//! exclude_dirs = ["node_modules", ".git", "venv", ...]
//! exclude_files = [".DS_Store", "package-lock.json", ".env", ...]
//! binary_extensions = ["png", "jpg", "zip", "exe", ...]
//!
//! [languages]
//! py = "python"
//! rs = "rust"
//! ```
//!
//! Arrays replace the stock value wholesale; the `languages` table merges
//! key-by-key. Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the scan root when no `--config` is given.
pub const CONFIG_FILENAME: &str = "code-snapshot.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Everything a snapshot run needs to know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnapshotConfig {
    /// Directory to scan. Relative paths in the snapshot are relative to it.
    /// Set from the command line only; the config file lives inside it.
    #[serde(skip, default = "default_root")]
    pub root: PathBuf,
    /// Path of the markdown document to write (overwritten on every run).
    pub output: PathBuf,
    /// Maximum number of leading lines copied from each file.
    pub max_lines: usize,
    /// Directory names pruned before descent, matched exactly.
    pub exclude_dirs: BTreeSet<String>,
    /// File names skipped, matched exactly.
    pub exclude_files: BTreeSet<String>,
    /// Lower-cased extensions (no leading dot) that are never opened.
    pub binary_extensions: BTreeSet<String>,
    /// Lower-cased extension → fence language label.
    pub languages: BTreeMap<String, String>,
}

const EXCLUDE_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "venv",
    ".venv",
    "dist",
    "build",
    "__pycache__",
    ".svn",
    ".hg",
    "bin",
    "obj",
];

// `.env` is here so secrets never end up in a snapshot.
const EXCLUDE_FILES: &[&str] = &[
    ".DS_Store",
    "package-lock.json",
    "yarn.lock",
    "npm-debug.log",
    ".env",
];

#[rustfmt::skip]
const BINARY_EXTENSIONS: &[&str] = &[
    // Images
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "svg", "webp",
    // Fonts
    "woff", "woff2", "ttf", "eot",
    // Media
    "mp4", "webm", "ogg", "mp3", "wav", "mov",
    // Archives
    "zip", "tar", "gz", "rar", "7z",
    // Documents
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx",
    // Compiled code
    "exe", "dll", "so", "a", "o", "lib", "class", "pyc",
];

const LANGUAGES: &[(&str, &str)] = &[
    ("py", "python"),
    ("js", "javascript"),
    ("ts", "typescript"),
    ("jsx", "jsx"),
    ("tsx", "tsx"),
    ("html", "html"),
    ("css", "css"),
    ("scss", "scss"),
    ("json", "json"),
    ("md", "markdown"),
    ("txt", "text"),
    ("sh", "bash"),
    ("sql", "sql"),
    ("java", "java"),
    ("c", "c"),
    ("cpp", "cpp"),
    ("go", "go"),
    ("rs", "rust"),
    ("php", "php"),
    ("rb", "ruby"),
    ("yml", "yaml"),
    ("yaml", "yaml"),
    ("xml", "xml"),
    ("dockerfile", "dockerfile"),
    ("gitignore", "bash"),
];

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            output: PathBuf::from("code_snapshot.md"),
            max_lines: 75,
            exclude_dirs: to_set(EXCLUDE_DIRS),
            exclude_files: to_set(EXCLUDE_FILES),
            binary_extensions: to_set(BINARY_EXTENSIONS),
            languages: LANGUAGES
                .iter()
                .map(|(ext, lang)| (ext.to_string(), lang.to_string()))
                .collect(),
        }
    }
}

/// Lower-case an extension and drop a leading dot (`".PNG"` → `"png"`).
pub fn normalize_extension(ext: &str) -> String {
    ext.strip_prefix('.').unwrap_or(ext).to_lowercase()
}

impl SnapshotConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_lines == 0 {
            return Err(ConfigError::Validation(
                "max_lines must be at least 1".into(),
            ));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        Ok(())
    }

    /// Bring user-supplied extension keys into the form the classifier
    /// looks up: lower-case, no leading dot.
    fn normalize(mut self) -> Self {
        self.binary_extensions = self
            .binary_extensions
            .iter()
            .map(|e| normalize_extension(e))
            .collect();
        self.languages = self
            .languages
            .into_iter()
            .map(|(ext, lang)| (normalize_extension(&ext), lang))
            .collect();
        self
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude_dirs.contains(name)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SnapshotConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize,
/// normalize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<SnapshotConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SnapshotConfig = merged.try_into()?;
    let config = config.normalize();
    config.validate()?;
    Ok(config)
}

/// Load config from an explicitly named file. A missing file is an error.
pub fn load_config(path: &Path) -> Result<SnapshotConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    resolve_config(Some(value))
}

/// Load `code-snapshot.toml` from the scan root, falling back to stock
/// defaults when the root has none.
pub fn load_root_config(root: &Path) -> Result<SnapshotConfig, ConfigError> {
    resolve_config(load_raw_config(&root.join(CONFIG_FILENAME))?)
}

/// Returns a fully-commented stock `code-snapshot.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# code-snapshot configuration
# ==========================
#
# Place this file in the directory you snapshot, or pass it with --config.
# Every key is optional. Arrays replace the defaults wholesale; the
# [languages] table is merged key-by-key.

# Markdown document written at the end of the run (overwritten).
output = "code_snapshot.md"

# Leading lines copied from each file.
max_lines = 75

# Directory names that are never descended into.
exclude_dirs = [
    "node_modules", ".git", "venv", ".venv", "dist", "build",
    "__pycache__", ".svn", ".hg", "bin", "obj",
]

# Exact file names that are skipped. Keep ".env" here to avoid leaking secrets.
exclude_files = [
    ".DS_Store", "package-lock.json", "yarn.lock", "npm-debug.log", ".env",
]

# Extensions that are never opened (case-insensitive, leading dot optional).
binary_extensions = [
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "svg", "webp",
    "woff", "woff2", "ttf", "eot",
    "mp4", "webm", "ogg", "mp3", "wav", "mov",
    "zip", "tar", "gz", "rar", "7z",
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx",
    "exe", "dll", "so", "a", "o", "lib", "class", "pyc",
]

# Extension -> code fence language. Unlisted extensions get a bare fence.
[languages]
py = "python"
js = "javascript"
ts = "typescript"
jsx = "jsx"
tsx = "tsx"
html = "html"
css = "css"
scss = "scss"
json = "json"
md = "markdown"
txt = "text"
sh = "bash"
sql = "sql"
java = "java"
c = "c"
cpp = "cpp"
go = "go"
rs = "rust"
php = "php"
rb = "ruby"
yml = "yaml"
yaml = "yaml"
xml = "xml"
dockerfile = "dockerfile"
gitignore = "bash"
"##
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

type BoxError = Box<dyn std::error::Error>;

/// Contents of `config.toml`.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Fallbacks used when a flag is not given on the command line.
///
/// Relative paths are resolved against the directory holding the config file.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Defaults {
    pub stop_words: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

/// Files a single extraction run reads and writes.
#[derive(Debug, PartialEq, Eq)]
pub struct Resolved {
    pub stop_words: PathBuf,
    pub output: Option<PathBuf>,
}

pub fn default_config_path() -> Option<PathBuf> {
    let mut p = dirs::config_dir()?;
    p.push("tag-extractor");
    p.push("config.toml");
    Some(p)
}

impl Config {
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load an explicitly named config file, or the default one if it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self, BoxError> {
        Self::load_from(explicit, default_config_path())
    }

    /// Load `explicit` if given, otherwise `default_path` if that file exists.
    ///
    /// A missing default file yields an empty config; a missing explicit file is
    /// an error.
    pub fn load_from(
        explicit: Option<&Path>,
        default_path: Option<PathBuf>,
    ) -> Result<Self, BoxError> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => match default_path {
                Some(p) if p.exists() => p,
                _ => return Ok(Self::default()),
            },
        };
        let text = fs::read_to_string(&path)
            .map_err(|e| format!("Error reading config {}: {}", path.display(), e))?;
        let mut config = Self::parse(&text)
            .map_err(|e| format!("Error parsing config {}: {}", path.display(), e))?;
        if let Some(base) = path.parent() {
            config.defaults.rebase(base);
        }
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Where to save tags for `text_file` when no output flag was given.
    pub fn output_for(&self, text_file: &Path) -> Option<PathBuf> {
        let dir = self.defaults.output_dir.as_ref()?;
        let stem = text_file.file_stem()?.to_string_lossy();
        Some(dir.join(format!("{}.tags.txt", stem)))
    }

    /// Combine command-line flags with the configured defaults; flags win.
    pub fn resolve(
        &self,
        stop_words: Option<PathBuf>,
        output: Option<PathBuf>,
        text_file: &Path,
    ) -> Result<Resolved, BoxError> {
        let stop_words = stop_words
            .or_else(|| self.defaults.stop_words.clone())
            .ok_or("No stop words file given and none configured")?;
        let output = output.or_else(|| self.output_for(text_file));
        Ok(Resolved { stop_words, output })
    }
}

impl Defaults {
    fn rebase(&mut self, base: &Path) {
        for path in [&mut self.stop_words, &mut self.output_dir].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Starter config written by `tag-extractor init`.
pub fn starter_config() -> Result<String, toml::ser::Error> {
    let config = Config {
        defaults: Defaults {
            stop_words: Some(PathBuf::from("stop-words.txt")),
            output_dir: None,
        },
    };
    toml::to_string(&config)
}

/// Write the starter config to `path`, creating parent directories.
pub fn write_starter(path: &Path) -> Result<(), BoxError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, starter_config()?)?;
    Ok(())
}

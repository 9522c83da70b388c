use std::env;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

pub const SEPARATOR_VAR: &str = "WORDCALC_SEPARATOR";
pub const VERBOSE_VAR: &str = "WORDCALC_VERBOSE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub separator: char,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            separator: ',',
            verbose: false,
        }
    }
}

/// `key=value` pairs read from the config file, in file order.
pub type FileSettings = Vec<(String, String)>;

impl Config {
    /// Resolution order: environment variables, then the XDG config file,
    /// then defaults. Command-line flags are applied by the caller.
    pub fn load() -> Self {
        let file = config_file_path()
            .and_then(|path| fs::File::open(path).ok())
            .map(|f| read_settings(BufReader::new(f)))
            .unwrap_or_default();
        Self::from_sources(
            env::var(SEPARATOR_VAR).ok().as_deref(),
            env::var(VERBOSE_VAR).ok().as_deref(),
            &file,
        )
    }

    pub fn from_sources(
        separator_env: Option<&str>,
        verbose_env: Option<&str>,
        file: &FileSettings,
    ) -> Self {
        let mut config = Config::default();

        for (key, value) in file {
            match key.as_str() {
                "separator" => {
                    if let Some(c) = parse_separator(value) {
                        config.separator = c;
                    }
                }
                "verbose" => {
                    if let Some(flag) = parse_flag(value) {
                        config.verbose = flag;
                    }
                }
                _ => {}
            }
        }

        if let Some(c) = separator_env.and_then(parse_separator) {
            config.separator = c;
        }
        if let Some(flag) = verbose_env.and_then(parse_flag) {
            config.verbose = flag;
        }

        config
    }
}

/// A separator must be exactly one character; "space" names ' '.
pub fn parse_separator(value: &str) -> Option<char> {
    if value == "space" {
        return Some(' ');
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// ~/.config/wordcalc/config, honoring XDG_CONFIG_HOME
fn config_file_path() -> Option<PathBuf> {
    let config_dir = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;
    Some(config_dir.join("wordcalc").join("config"))
}

pub fn read_settings<R: BufRead>(reader: R) -> FileSettings {
    let mut settings = Vec::new();
    for line in reader.lines().map_while(Result::ok) {
        let line = line.trim();
        if line.starts_with('#') || line.is_empty() {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            settings.push((key.trim().to_string(), value.trim().to_string()));
        }
    }
    settings
}

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const RC_FILE_NAME: &str = ".trieditrc";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RcConfig {
    pub prompt: String,
    pub show_banner: bool,
    pub show_caret: bool,
    pub use_color: bool,
    pub dictionary: Option<PathBuf>,
}

impl Default for RcConfig {
    fn default() -> Self {
        Self {
            prompt: "Enter command: ".to_string(),
            show_banner: true,
            show_caret: false,
            use_color: false,
            dictionary: None,
        }
    }
}

pub struct RcLoader;

impl RcLoader {
    /// Get the path to the RC file
    /// Looks for .trieditrc in:
    /// 1. Current directory
    /// 2. Home directory (~/.trieditrc)
    pub fn get_rc_path() -> Option<PathBuf> {
        let current_rc = Path::new(RC_FILE_NAME);
        if current_rc.exists() {
            return Some(current_rc.to_path_buf());
        }

        if let Ok(home) = env::var("HOME") {
            let home_rc = Path::new(&home).join(RC_FILE_NAME);
            if home_rc.exists() {
                return Some(home_rc);
            }
        }

        None
    }

    /// Load the RC file from the default locations. A missing or unreadable
    /// file yields the defaults.
    pub fn load_config() -> RcConfig {
        let Some(rc_path) = Self::get_rc_path() else {
            return RcConfig::default();
        };

        match Self::load_from(&rc_path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}");
                RcConfig::default()
            }
        }
    }

    /// Load a specific RC file. Unlike [`RcLoader::load_config`], a read
    /// failure is reported to the caller.
    pub fn load_from(path: &Path) -> Result<RcConfig, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("loading config from {}", path.display());
        let mut config = RcConfig::default();
        Self::parse_config_content(&content, &mut config);
        Ok(config)
    }

    /// Parse the content of an RC file
    fn parse_config_content(content: &str, config: &mut RcConfig) {
        for line in content.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') || line.starts_with('"') {
                continue;
            }

            Self::parse_config_line(line, config);
        }
    }

    /// Parse a single configuration line
    fn parse_config_line(line: &str, config: &mut RcConfig) {
        // The prompt may contain '#', so it bypasses comment stripping
        if let Some((key, value)) = line.split_once('=') {
            if key.trim() == "prompt" {
                config.prompt = Self::unquote(value.trim_start()).to_string();
                return;
            }
        }

        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        }
        .trim();

        if let Some(stripped) = line.strip_prefix("set ") {
            let setting = stripped.trim();
            match setting {
                "banner" => config.show_banner = true,
                "nobanner" => config.show_banner = false,
                "caret" => config.show_caret = true,
                "nocaret" => config.show_caret = false,
                "color" => config.use_color = true,
                "nocolor" => config.use_color = false,
                _ => {
                    if let Some(path) = setting.strip_prefix("dictionary=") {
                        Self::set_dictionary(config, path);
                    } else {
                        log::warn!("unknown setting in {RC_FILE_NAME}: {setting}");
                    }
                }
            }
        } else if let Some((key, value)) = line.split_once('=') {
            let value = value.trim();
            match key.trim() {
                "banner" | "show_banner" => Self::set_flag(&mut config.show_banner, key, value),
                "caret" | "show_caret" => Self::set_flag(&mut config.show_caret, key, value),
                "color" | "use_color" => Self::set_flag(&mut config.use_color, key, value),
                "dictionary" => Self::set_dictionary(config, value),
                other => log::warn!("unknown setting in {RC_FILE_NAME}: {other}"),
            }
        } else {
            log::warn!("ignoring malformed line in {RC_FILE_NAME}: {line}");
        }
    }

    fn set_flag(flag: &mut bool, key: &str, value: &str) {
        match value {
            "true" | "1" | "yes" => *flag = true,
            "false" | "0" | "no" => *flag = false,
            _ => log::warn!("invalid value for {}: {value}", key.trim()),
        }
    }

    fn set_dictionary(config: &mut RcConfig, value: &str) {
        let value = Self::unquote(value.trim());
        if value.is_empty() {
            log::warn!("empty dictionary path ignored");
        } else {
            config.dictionary = Some(PathBuf::from(value));
        }
    }

    fn unquote(value: &str) -> &str {
        value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value)
    }

    /// Generate a sample RC file content
    pub fn generate_sample_rc() -> String {
        r#"# triedit configuration file (.trieditrc)
# Lines starting with # or " are comments

# Display settings
set banner             # Print the command list on startup (or set nobanner)
set nocaret            # Draw a ^ under the cursor position (set caret to enable)
set nocolor            # Colour the caret marker

# Prompt shown before each command; quote it to keep trailing spaces
prompt="Enter command: "

# Words loaded into the dictionary at startup, one per line
# dictionary=/usr/share/dict/words

# Alternative key=value syntax:
# show_banner=true
# show_caret=false
# use_color=false
"#
        .to_string()
    }
}

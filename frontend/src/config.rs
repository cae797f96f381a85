//! Startup configuration: a TOML file overridden by CLI flags.
//!
//! File values override built-in defaults, CLI flags override both. A
//! missing file is simply the defaults; a file that exists but cannot be
//! read or parsed is a startup error.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use dotmatrix_core::video::{SOURCE_HEIGHT, SOURCE_WIDTH};

/// Explicit video mode for the host window. A zero width or height means
/// "absent": the window size is derived from `scale` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VideoMode {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl Default for VideoMode {
    fn default() -> Self {
        Self { width: 240, height: 240, depth: 16 }
    }
}

/// All startup options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ask the host for hardware-accelerated scaling. A hint: accepted and
    /// logged, but the software scaler always runs.
    pub hardware_scaling: bool,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Alt+Enter toggles fullscreen.
    pub alt_enter: bool,
    /// Integer window scale, used only when the video mode is absent.
    pub scale: u32,
    /// Explicit video mode.
    pub video: VideoMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hardware_scaling: false,
            fullscreen: false,
            alt_enter: true,
            scale: 1,
            video: VideoMode::default(),
        }
    }
}

impl Config {
    /// Final window size: the explicit mode, or the scaled native
    /// resolution when either dimension is zero.
    pub fn window_size(&self) -> (u32, u32) {
        if self.video.width == 0 || self.video.height == 0 {
            let scale = self.scale.max(1);
            (SOURCE_WIDTH as u32 * scale, SOURCE_HEIGHT as u32 * scale)
        } else {
            (self.video.width, self.video.height)
        }
    }

    /// File config (if any) with CLI overrides applied.
    pub fn resolve(cli: &Cli) -> Result<Config, ConfigError> {
        let path = cli.config.clone().or_else(default_path);
        let mut cfg = match &path {
            Some(p) => load(p)?,
            None => Config::default(),
        };

        if let Some(scale) = cli.scale {
            // an explicit --scale beats a file-supplied fixed mode
            cfg.scale = scale;
            cfg.video.width = 0;
            cfg.video.height = 0;
        }
        if let Some(width) = cli.width {
            cfg.video.width = width;
        }
        if let Some(height) = cli.height {
            cfg.video.height = height;
        }
        if cli.fullscreen {
            cfg.fullscreen = true;
        }
        if cli.no_alt_enter {
            cfg.alt_enter = false;
        }
        Ok(cfg)
    }
}

/// Command-line interface. Flags override config-file values.
#[derive(Debug, Default, clap::Parser)]
#[command(name = "dotmatrix", about = "Scaled display frontend for a 160x144 emulated screen")]
pub struct Cli {
    /// Config file path (default: <config dir>/dotmatrix/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Integer window scale (overrides any fixed video mode)
    #[arg(long)]
    pub scale: Option<u32>,

    /// Window width in pixels (0 = derive from scale)
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels (0 = derive from scale)
    #[arg(long)]
    pub height: Option<u32>,

    /// Start in fullscreen mode
    #[arg(long)]
    pub fullscreen: bool,

    /// Disable the Alt+Enter fullscreen toggle
    #[arg(long)]
    pub no_alt_enter: bool,
}

/// Errors raised while loading the config file.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read config file: {e}"),
            Self::Parse(e) => write!(f, "cannot parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

/// Default config file location: `<config dir>/dotmatrix/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dotmatrix").join("config.toml"))
}

/// Load configuration from `path`; a missing file yields the defaults.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(toml::from_str(&text)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("no config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(ConfigError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_mode() {
        let cfg = Config::default();
        assert_eq!(cfg.video, VideoMode { width: 240, height: 240, depth: 16 });
        assert_eq!(cfg.window_size(), (240, 240));
        assert!(cfg.alt_enter);
        assert!(!cfg.fullscreen);
        assert!(!cfg.hardware_scaling);
    }

    #[test]
    fn absent_mode_derives_from_scale() {
        let mut cfg = Config::default();
        cfg.video.width = 0;
        cfg.scale = 3;
        assert_eq!(cfg.window_size(), (480, 432));

        // scale below 1 is clamped, never a zero-sized window
        cfg.scale = 0;
        assert_eq!(cfg.window_size(), (160, 144));
    }

    #[test]
    fn file_values_parse_over_defaults() {
        let cfg: Config = toml::from_str(
            "fullscreen = true\nscale = 2\n\n[video]\nwidth = 0\nheight = 0\n",
        )
        .unwrap();
        assert!(cfg.fullscreen);
        assert!(cfg.alt_enter); // untouched fields keep their defaults
        assert_eq!(cfg.video.depth, 16);
        assert_eq!(cfg.window_size(), (320, 288));
    }

    #[test]
    fn cli_overrides_file_and_defaults() {
        let dir = std::env::temp_dir().join("dotmatrix_config_test");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "alt_enter = true\nscale = 2\n").unwrap();

        let cli = Cli {
            config: Some(path),
            scale: Some(4),
            no_alt_enter: true,
            fullscreen: true,
            ..Cli::default()
        };
        let cfg = Config::resolve(&cli).unwrap();
        assert_eq!(cfg.scale, 4);
        assert!(!cfg.alt_enter);
        assert!(cfg.fullscreen);
        // an explicit --scale clears the fixed mode
        assert_eq!(cfg.window_size(), (640, 576));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_the_defaults() {
        let path = std::env::temp_dir().join("dotmatrix_config_missing/none.toml");
        let cfg = load(&path).unwrap();
        assert_eq!(cfg.window_size(), (240, 240));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = std::env::temp_dir().join("dotmatrix_config_bad");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "scale = \"many\"\n").unwrap();

        assert!(matches!(load(&path), Err(ConfigError::Parse(_))));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest config file we are willing to read.
pub const MAX_CONFIG_BYTES: u64 = 64 * 1024;

/// Errors from locating, reading or writing `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("xdg base directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: config file is {size} bytes, limit is {limit}", .path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Transport tuning (optional `[transport]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Seconds allowed for the TCP connect of one probe.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for one whole probe request (connect + body).
    pub timeout_secs: u64,
    /// Bodies larger than this abort the transfer and reject the path.
    pub max_body_bytes: u64,
    /// When false a 3xx answer counts as a non-200 rejection.
    pub follow_redirects: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            max_body_bytes: 8 * 1024 * 1024,
            follow_redirects: false,
        }
    }
}

/// Global configuration loaded from `~/.config/feedprobe/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedprobeConfig {
    /// Probe every candidate path at once instead of one after another.
    /// Result selection is the same either way.
    pub parallel_probes: bool,
    pub transport: TransportConfig,
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("feedprobe")?;
    xdg_dirs
        .place_config_file("config.toml")
        .map_err(|source| ConfigError::Io {
            path: xdg_dirs.get_config_home(),
            source,
        })
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FeedprobeConfig, ConfigError> {
    let path = config_path()?;
    init_at(&path)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn init_at(path: &Path) -> Result<FeedprobeConfig, ConfigError> {
    if !path.exists() {
        let default_cfg = FeedprobeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, toml).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(path)
}

/// Load configuration from an existing file. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<FeedprobeConfig, ConfigError> {
    let data = read_bounded(path, MAX_CONFIG_BYTES)?;
    let cfg: FeedprobeConfig = toml::from_str(&data)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

/// Read a whole text file, refusing anything larger than `max_len` bytes.
pub fn read_bounded(path: &Path, max_len: u64) -> Result<String, ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = fs::File::open(path).map_err(io_err)?;
    let size = file.metadata().map_err(io_err)?.len();
    if size > max_len {
        tracing::warn!("{}: config file too large ({} bytes)", path.display(), size);
        return Err(ConfigError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: max_len,
        });
    }

    // The file may grow between stat and read.
    let mut data = String::new();
    file.take(max_len + 1)
        .read_to_string(&mut data)
        .map_err(io_err)?;
    if data.len() as u64 > max_len {
        return Err(ConfigError::TooLarge {
            path: path.to_path_buf(),
            size: data.len() as u64,
            limit: max_len,
        });
    }
    Ok(data)
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::resolver::MAX_BATCH_SIZE;

/// Desktop browser User-Agent sent with every image and upstream request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTTP settings shared by image downloads and upstream sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Total per-request timeout in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Local directory a mirrored file lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceRoot {
    /// `ScriptsConfig::dir`
    Scripts,
    /// `HeroFacesConfig::data_dir`
    Data,
}

/// One file mirrored from the upstream repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamResource {
    /// Path relative to `UpstreamConfig::base_url`.
    pub url: String,
    pub root: ResourceRoot,
    /// Local destination, relative to `root`.
    pub path: String,
}

impl UpstreamResource {
    fn script(name: &str) -> Self {
        Self {
            url: format!("scripts/{name}"),
            root: ResourceRoot::Scripts,
            path: name.to_string(),
        }
    }

    fn data(path: &str) -> Self {
        Self {
            url: format!("data/{path}"),
            root: ResourceRoot::Data,
            path: path.to_string(),
        }
    }
}

/// Where `sync` pulls dataset and helper script files from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub resources: Vec<UpstreamResource>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://raw.githubusercontent.com/Eskuero/fehbuilder/master/".to_string(),
            resources: vec![
                UpstreamResource::script("renewdata-assets.py"),
                UpstreamResource::script("utils.py"),
                UpstreamResource::data("content/fullunits.json"),
                UpstreamResource::data("languages/fulllanguages.json"),
                UpstreamResource::data("content/fullskills.json"),
            ],
        }
    }
}

/// Upstream helper scripts: the renew job and the URL resolver both live here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptsConfig {
    pub dir: PathBuf,
    /// Interpreter used for every upstream script.
    pub interpreter: String,
    pub renew_script: String,
}

impl Default for ScriptsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("scripts"),
            interpreter: "python3".to_string(),
            renew_script: "renewdata-assets.py".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/herofaces/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroFacesConfig {
    /// Root of the mirrored dataset and the image store.
    pub data_dir: PathBuf,
    /// Language code used for display names.
    pub language: String,
    /// Wiki filenames per URL-resolution call (clamped to 1..=50).
    pub batch_size: usize,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub scripts: ScriptsConfig,
}

impl Default for HeroFacesConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            language: "USEN".to_string(),
            batch_size: MAX_BATCH_SIZE,
            http: HttpConfig::default(),
            upstream: UpstreamConfig::default(),
            scripts: ScriptsConfig::default(),
        }
    }
}

impl HeroFacesConfig {
    /// Batch size actually used, never above the resolver limit.
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.clamp(1, MAX_BATCH_SIZE)
    }

    pub fn faces_dir(&self) -> PathBuf {
        self.data_dir.join("img").join("faces")
    }

    /// Directory a mirrored resource is written under.
    pub fn resource_dir(&self, root: ResourceRoot) -> &Path {
        match root {
            ResourceRoot::Scripts => &self.scripts.dir,
            ResourceRoot::Data => &self.data_dir,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("herofaces")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HeroFacesConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but for an explicit path (`--config`).
pub fn load_or_init_at(path: &Path) -> Result<HeroFacesConfig> {
    if !path.exists() {
        let default_cfg = HeroFacesConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: HeroFacesConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

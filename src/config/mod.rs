use serde::Deserialize;
use std::path::PathBuf;

/// Built-in map parameters: Dhanmondi, Dhaka, with Keari Plaza as the
/// highlighted location. Running with no flags and no config file
/// uses exactly these.
pub mod defaults {
    pub const CENTER_LAT: f64 = 23.74;
    pub const CENTER_LON: f64 = 90.385;
    pub const RADIUS_M: u32 = 1500;
    pub const ZOOM: u8 = 15;
    pub const HIGHLIGHT_LAT: f64 = 23.7485;
    pub const HIGHLIGHT_LON: f64 = 90.3705;
    pub const HIGHLIGHT_NAME: &str = "Keari Plaza, Dhanmondi 15";
    pub const HIGHLIGHT_TOOLTIP: &str = "Keari Plaza";
    pub const OUTPUT: &str = "dhanmondi_businesses.html";
}

fn default_overpass_url() -> String {
    "https://overpass-api.de/api/interpreter".to_string()
}

fn default_timeout_secs() -> u64 {
    25
}

#[derive(Debug, Deserialize, Clone)]
pub struct OverpassConfig {
    #[serde(default = "default_overpass_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            url: default_overpass_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub radius: Option<u32>,
    #[serde(default)]
    pub zoom: Option<u8>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub highlight_lat: Option<f64>,
    #[serde(default)]
    pub highlight_lon: Option<f64>,
    #[serde(default)]
    pub highlight_name: Option<String>,
    #[serde(default)]
    pub highlight_tooltip: Option<String>,
    #[serde(default)]
    pub verbose: Option<bool>,
    #[serde(default)]
    pub overpass: Option<OverpassConfig>,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("poimap.toml"));
    paths.push(PathBuf::from(".poimap.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("poimap").join("config.toml"));
        paths.push(config_dir.join("poimap.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".poimap.toml"));
        paths.push(home.join(".config").join("poimap").join("config.toml"));
    }

    paths
}

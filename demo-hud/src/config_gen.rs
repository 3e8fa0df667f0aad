use std::fs;
use std::path::Path;

use glim_mono_renderer::config::SurfaceConfig;
use serde::Serialize;

use crate::config::{FontConfig, SystemConfig};

#[derive(Serialize)]
struct FullConfig {
    system: SystemConfig,
    font: FontConfig,
    surface: SurfaceConfig,
}

pub fn ensure_config_exists(path: &str) {
    if Path::new(path).exists() {
        return;
    }

    println!("Creating default configuration at '{}'...", path);

    let default_config = FullConfig {
        system: SystemConfig::default(),
        font: FontConfig::default(),
        surface: SurfaceConfig::default(),
    };

    let toml_str = toml::to_string_pretty(&default_config)
        .expect("Failed to serialize default config");

    if let Err(e) = fs::write(path, toml_str) {
        eprintln!("Failed to write config file: {}", e);
    }
}

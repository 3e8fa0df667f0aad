use env_logger::Builder;

use crate::config::SystemConfig;
use crate::config_gen;

pub fn init(config_path: &str) {
    config_gen::ensure_config_exists(config_path);

    if let Err(e) = glim_shared::config::init(config_path) {
        eprintln!("Config load warning: {}", e);
    }

    let sys_cfg: SystemConfig = glim_shared::config::section("system");
    Builder::from_env(env_logger::Env::default().default_filter_or(sys_cfg.log_level.as_str()))
        .init();
}

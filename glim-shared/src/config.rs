use std::fs;
use std::path::Path;
use std::sync::RwLock;

use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use toml::Table;

static STORE: OnceCell<RwLock<Table>> = OnceCell::new();

/// Load the global config from a TOML file. Call once at startup.
///
/// A missing file is not an error (the process runs on section
/// defaults); broken syntax is.
pub fn init<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    let path = path.as_ref();

    if !path.exists() {
        log::warn!("Config file {:?} missing, running on defaults", path);
        return set_table(Table::new());
    }

    log::info!("Loading config from {:?}", path);
    init_from_str(&fs::read_to_string(path)?)
}

/// Load the global config from an in-memory TOML string.
pub fn init_from_str(src: &str) -> anyhow::Result<()> {
    let table: Table = toml::from_str(src)
        .map_err(|e| anyhow::anyhow!("config syntax error: {e}"))?;
    set_table(table)
}

fn set_table(table: Table) -> anyhow::Result<()> {
    STORE
        .set(RwLock::new(table))
        .map_err(|_| anyhow::anyhow!("config already initialized"))
}

/// Deserialize the `[name]` section.
///
/// Falls back to `T::default()` when the store was never initialized,
/// the section is absent, or its shape does not match. Never a hard
/// failure, always a log line.
pub fn section<T: DeserializeOwned + Default>(name: &str) -> T {
    let Some(store) = STORE.get() else {
        log::warn!("Config read before init, section '[{name}]' defaulted");
        return T::default();
    };

    let guard = store.read().unwrap_or_else(|poisoned| poisoned.into_inner());

    match guard.get(name) {
        Some(value) => value.clone().try_into().unwrap_or_else(|e| {
            log::warn!("Config section '[{name}]' mismatch: {e}. Using defaults.");
            T::default()
        }),
        None => T::default(),
    }
}

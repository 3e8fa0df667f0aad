mod config;
mod config_gen;
mod setup;

use anyhow::Context;
use glim_mono_renderer::MonoSurface;
use glim_ui::{Color, FontStyle, Label, StringTable};

use crate::config::{FontConfig, SystemConfig};

fn main() -> anyhow::Result<()> {
    setup::init("glim.toml");
    log::info!(">>> glim demo hud <<<");

    let sys_cfg: SystemConfig = glim_shared::config::section("system");
    let font_cfg: FontConfig = glim_shared::config::section("font");
    let strings = load_strings(&sys_cfg.strings_path);

    let mut surface = MonoSurface::from_config();

    let mut title = Label::from_resource(&strings, "title")
        .context("string table has no 'title' entry")?
        .at(16.0, 0.0);
    title.set_font(font_cfg.to_font().with_size(24.0));
    title.set_font_style(FontStyle::Bold);
    log::debug!(
        "title: font {} {}, width {}",
        title.font().family,
        title.font_style(),
        title.width(&surface)
    );

    let mut status = Label::from_resource(&strings, "status")
        .context("string table has no 'status' entry")?
        .at(16.0, 32.0);
    status.set_font_face("monospace", 13.0);
    status.set_color(Color::GRAY);

    // The untyped path, the way a script binding would drive it.
    let mut score = Label::new("score 0000").at(16.0, 64.0);
    score.set_font_spec("monospace", 2, 13.0)?;
    score.set_text("score 0120");

    // A style code of 130 is what a swapped argument pair looks like.
    if let Err(e) = score.set_font_style_code(130) {
        log::warn!("rejected style change: {}", e);
    }

    for label in [&mut title, &mut status, &mut score] {
        label.paint(&mut surface);
    }

    print!("{}", surface);
    Ok(())
}

fn load_strings(path: &str) -> StringTable {
    match StringTable::load(path) {
        Ok(table) => table,
        Err(e) => {
            log::warn!("String table unavailable ({}), using built-ins", e);
            let mut table = StringTable::new();
            table.insert("title", "GLIM DEMO HUD");
            table.insert("status", "all systems nominal");
            table
        }
    }
}

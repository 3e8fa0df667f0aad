use serde::Deserialize;

#[derive(Debug, PartialEq, Deserialize)]
struct HudSection {
    cols: usize,
    label: String,
}

impl Default for HudSection {
    fn default() -> Self {
        Self {
            cols: 80,
            label: "hud".into(),
        }
    }
}

// One test fn: the store is process-global, so the order of reads
// around init matters and has to be driven explicitly.
#[test]
fn section_reads_around_init() {
    // Before init every section is served from defaults.
    let early: HudSection = glim_shared::config::section("hud");
    assert_eq!(early, HudSection::default());

    glim_shared::config::init_from_str(
        r#"
[hud]
cols = 120
label = "left"

[broken]
cols = "not a number"
"#,
    )
    .unwrap();

    let hud: HudSection = glim_shared::config::section("hud");
    assert_eq!(hud.cols, 120);
    assert_eq!(hud.label, "left");

    // Absent and shape-mismatched sections degrade to defaults.
    let missing: HudSection = glim_shared::config::section("nowhere");
    assert_eq!(missing, HudSection::default());
    let broken: HudSection = glim_shared::config::section("broken");
    assert_eq!(broken, HudSection::default());

    // A second init is refused rather than silently replacing config.
    assert!(glim_shared::config::init_from_str("").is_err());
}

#[test]
fn broken_syntax_is_reported() {
    // Must not install a store; the other test owns initialization.
    assert!(glim_shared::config::init_from_str("cols = = 3").is_err());
}

//! Generate SVG reference renders of the designer preview.
//!
//! Writes the default configuration plus one seeded preset per vibe into
//! `docs/renders/` (or the directory given as the first argument).

mod svg;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use preset_engine::{PresetSynthesizer, Vibe};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tee_preview::map_to_visual;
use tee_types::{Configuration, OptionSet};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::svg::visual_to_svg;

/// Seed for the preset renders, so reruns produce identical files.
const RENDER_SEED: u64 = 0x7ee5;

fn write_render(dir: &Path, name: &str, config: &Configuration) -> Result<(), Box<dyn Error>> {
    let visual = map_to_visual(config);
    let svg = visual_to_svg(&visual, &config.title);
    let path = dir.join(format!("{name}.svg"));
    fs::write(&path, svg)?;
    info!(
        path = %path.display(),
        title = %config.title,
        glyphs = visual.glyphs.len(),
        "wrote render"
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("docs/renders"));
    fs::create_dir_all(&out_dir)?;

    let base = Configuration::default();
    write_render(&out_dir, "default", &base)?;

    let synthesizer = PresetSynthesizer::default();
    let mut rng = StdRng::seed_from_u64(RENDER_SEED);
    for vibe in Vibe::known() {
        let preset = synthesizer.generate_with(&base, vibe, &mut rng);
        info!(vibe = %vibe, narrative = %preset.narrative, "generated preset");
        write_render(&out_dir, &format!("preset_{}", vibe.key()), &preset.apply_to(&base))?;
    }

    println!(
        "Rendered {} previews to {}",
        Vibe::known().len() + 1,
        out_dir.display()
    );
    Ok(())
}

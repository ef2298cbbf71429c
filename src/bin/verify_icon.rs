use anyhow::Result;
use placeholder_icons::{
    config::{DEFAULT_BACKGROUND, DEFAULT_FOREGROUND},
    verify,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("icon-128.png"));

    let inspection = verify::inspect(&path)?;

    println!("Checking placeholder icon: {}", path.display());
    println!("Image dimensions: {}x{}", inspection.width, inspection.height);

    let [r, g, b] = inspection.corner.0;
    println!("  Corner (0, 0): RGB [{r}, {g}, {b}]");
    let [r, g, b] = inspection.center.0;
    println!(
        "  Center ({}, {}): RGB [{r}, {g}, {b}]",
        inspection.width / 2,
        inspection.height / 2
    );

    if inspection.matches(DEFAULT_BACKGROUND, DEFAULT_FOREGROUND) {
        println!("✓ Icon matches the default palette");
        Ok(())
    } else {
        anyhow::bail!("{} does not match the default palette", path.display())
    }
}

//! Info command handler

use std::path::Path;

use anyhow::{Context, Result};

use dfcodes::{unique_modes, Snapshot, SNAPSHOT_VERSION};

pub fn handle(snapshot_path: &Path) -> Result<()> {
    let snapshot = Snapshot::load(snapshot_path)
        .with_context(|| format!("Failed to load snapshot: {}", snapshot_path.display()))?;

    println!("Snapshot:     {}", snapshot_path.display());
    println!("Version:      {}", snapshot.version);
    if !snapshot.is_current_version() {
        println!("              (current format is {SNAPSHOT_VERSION})");
    }
    println!("Last updated: {}", snapshot.last_updated);
    println!("Data source:  {}", snapshot.data_source);

    let stats = snapshot.stats();
    println!();
    println!("Codes:        {}", stats.total);
    println!("  刀仔:       {}", stats.dao_zai);
    println!("  武器大师:   {}", stats.weapon_master);

    let modes = unique_modes(&snapshot.weapon_codes);
    let mode_names: Vec<String> = modes.iter().map(ToString::to_string).collect();
    println!("Modes:        {}", mode_names.join(", "));

    Ok(())
}

//! List command handler
//!
//! Loads a snapshot, selects one provider's record list, runs the query
//! pipeline, and prints the grouped view.

use std::path::Path;

use anyhow::{Context, Result};

use dfcodes::{classify, Criteria, Mode, Snapshot, Source, WeaponClass, WeaponCode};

pub fn handle(
    snapshot_path: &Path,
    source: &str,
    mode: &str,
    class: Option<&str>,
    search: Option<&str>,
) -> Result<()> {
    let snapshot = Snapshot::load(snapshot_path)
        .with_context(|| format!("Failed to load snapshot: {}", snapshot_path.display()))?;
    if !snapshot.is_current_version() {
        eprintln!(
            "Warning: snapshot version mismatch (expected {}, got {})",
            dfcodes::SNAPSHOT_VERSION,
            snapshot.version
        );
    }

    let source: Source = source
        .parse()
        .with_context(|| format!("Bad --source value: {source}"))?;
    let mode: Mode = mode
        .parse()
        .with_context(|| format!("Bad --mode value: {mode}"))?;
    let class: Option<WeaponClass> = class
        .map(|c| {
            c.parse().with_context(|| {
                let known: Vec<String> =
                    WeaponClass::ALL.iter().map(ToString::to_string).collect();
                format!("Bad --class value: {c} (known classes: {})", known.join(", "))
            })
        })
        .transpose()?;

    let codes: Vec<WeaponCode> = snapshot.by_source(source).into_iter().cloned().collect();

    let criteria = Criteria {
        mode,
        class,
        search: search.unwrap_or_default().to_string(),
    };
    let groups = dfcodes::query(&codes, &criteria);

    if groups.is_empty() {
        println!("No codes match ({source} / {mode})");
        return Ok(());
    }

    let total: usize = groups.iter().map(|g| g.codes.len()).sum();
    println!("{} weapons, {} codes ({source} / {mode})", groups.len(), total);
    println!();

    for group in &groups {
        let tier = group.tier();
        let tier_label = if dfcodes::has_tier(tier) { tier } else { "未定级" };
        println!("{} [{}] {}", group.name, tier_label, classify(group.name));

        for code in &group.codes {
            let mut line = format!("  {}", code.code);
            if let Some(price) = code.price {
                line.push_str(&format!("  价格: {price}万"));
            }
            if let Some(range) = code.range {
                line.push_str(&format!("  射程: {range}米"));
            }
            if let Some(updated) = &code.update_time {
                line.push_str(&format!("  更新: {updated}"));
            }
            println!("{line}");

            if !code.build.is_empty() {
                println!("    {}", code.build);
            }
        }
        println!();
    }

    Ok(())
}

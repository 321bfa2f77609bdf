//! Classify command handler

use anyhow::Result;

use dfcodes::classify;

pub fn handle(names: &[String]) -> Result<()> {
    for name in names {
        println!("{name}: {}", classify(name));
    }
    Ok(())
}

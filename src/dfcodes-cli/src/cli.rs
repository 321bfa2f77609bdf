//! CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dfcodes")]
#[command(about = "Delta Force weapon modification code browser", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List modification codes, grouped per weapon and sorted by tier
    #[command(visible_alias = "l")]
    List {
        /// Path to the snapshot file
        #[arg(short = 'f', long, default_value = "data/weapon_codes.json")]
        snapshot: PathBuf,

        /// Data provider ("刀仔"/"daozai" or "武器大师"/"weapon_master")
        #[arg(short = 'S', long, default_value = "daozai")]
        source: String,

        /// Game mode ("烽火地带"/"operations" or "全面战场"/"warfare")
        #[arg(short, long, default_value = "operations")]
        mode: String,

        /// Weapon class filter (e.g. "ar", "smg", "狙击"); all classes if omitted
        #[arg(short, long)]
        class: Option<String>,

        /// Substring search over name, build text, code, and tier
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Infer the weapon class for one or more weapon names
    #[command(visible_alias = "c")]
    Classify {
        /// Weapon display names (e.g. "M4A1", "SR-25专业射手")
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Show snapshot metadata and per-source counts
    #[command(visible_alias = "i")]
    Info {
        /// Path to the snapshot file
        #[arg(short = 'f', long, default_value = "data/weapon_codes.json")]
        snapshot: PathBuf,
    },
}

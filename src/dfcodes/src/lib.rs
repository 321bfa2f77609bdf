//! # dfcodes
//!
//! Delta Force weapon modification code library.
//!
//! This library provides functionality to:
//! - Load versioned weapon-code snapshots (JSON)
//! - Infer a weapon's class from its display name
//! - Filter codes by game mode, weapon class, and search text
//! - Group codes per weapon and sort groups by tier, then pinyin name
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use dfcodes::{Criteria, Mode, Snapshot, Source};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let snapshot = Snapshot::load(Path::new("data/weapon_codes.json"))?;
//! let codes: Vec<_> = snapshot.by_source(Source::DaoZai).into_iter().cloned().collect();
//!
//! let criteria = Criteria {
//!     mode: Mode::Operations,
//!     class: None,
//!     search: "m4".to_string(),
//! };
//!
//! for group in dfcodes::query(&codes, &criteria) {
//!     println!("{} [{}]: {} codes", group.name, group.tier(), group.codes.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod codes;
pub mod collate;
pub mod query;
pub mod snapshot;

// Re-export commonly used items
#[doc(inline)]
pub use classify::{classify, WeaponClass};
#[doc(inline)]
pub use codes::{has_tier, tier_priority, Mode, ParseError, Source, WeaponCode};
#[doc(inline)]
pub use collate::compare_names;
#[doc(inline)]
pub use query::{query, unique_modes, Criteria, WeaponGroup};
#[doc(inline)]
pub use snapshot::{Snapshot, SnapshotError, SnapshotStats, SNAPSHOT_VERSION};

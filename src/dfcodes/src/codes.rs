//! Weapon modification code records
//!
//! The record schema is the contract with the data supplier: field names and
//! optionality are fixed, and absent numeric fields stay absent (they are
//! never coerced to zero).

use serde::{Deserialize, Serialize};

/// Game mode a modification code applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// 烽火地带 - extraction raid mode
    #[serde(rename = "烽火地带")]
    Operations,
    /// 全面战场 - all-out battle mode
    #[serde(rename = "全面战场")]
    Warfare,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operations => write!(f, "烽火地带"),
            Self::Warfare => write!(f, "全面战场"),
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "烽火地带" | "operations" | "ops" => Ok(Self::Operations),
            "全面战场" | "warfare" => Ok(Self::Warfare),
            _ => Err(ParseError::InvalidMode(s.to_string())),
        }
    }
}

/// Upstream data provider a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// 刀仔
    #[serde(rename = "刀仔")]
    DaoZai,
    /// 武器大师
    #[serde(rename = "武器大师")]
    WeaponMaster,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DaoZai => write!(f, "刀仔"),
            Self::WeaponMaster => write!(f, "武器大师"),
        }
    }
}

impl std::str::FromStr for Source {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "刀仔" | "daozai" => Ok(Self::DaoZai),
            "武器大师" | "weapon_master" | "weaponmaster" => Ok(Self::WeaponMaster),
            _ => Err(ParseError::InvalidSource(s.to_string())),
        }
    }
}

/// One weapon modification code entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponCode {
    pub id: String,
    pub mode: Mode,
    /// Weapon display name (枪械名称)
    pub name: String,
    /// Rank label: "T0"/"T1"/"T2", or an unranked sentinel (see [`has_tier`])
    pub tier: String,
    /// Modification price in 万, absent when unknown
    #[serde(default)]
    pub price: Option<i64>,
    /// Build description (改装描述)
    pub build: String,
    /// The modification code string (改枪码)
    pub code: String,
    /// Effective range in meters, absent when unknown
    #[serde(default)]
    pub range: Option<i64>,
    #[serde(default)]
    pub update_time: Option<String>,
    pub source: Source,
}

/// Whether a tier label counts as ranked.
///
/// Empty, `"-"`, and the literal text `"null"` all mean unranked.
pub fn has_tier(tier: &str) -> bool {
    !tier.is_empty() && tier != "-" && tier != "null"
}

/// Sort priority for a tier label (lower sorts first)
///
/// Labels outside T0/T1/T2 rank after all mapped tiers.
pub fn tier_priority(tier: &str) -> u32 {
    match tier {
        "T0" => 0,
        "T1" => 1,
        "T2" => 2,
        _ => 999,
    }
}

/// Parse errors for string conversions
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown game mode: {0}")]
    InvalidMode(String),
    #[error("Unknown data source: {0}")]
    InvalidSource(String),
    #[error("Unknown weapon class: {0}")]
    InvalidWeaponClass(String),
}

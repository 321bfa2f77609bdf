//! Weapon class inference from display names
//!
//! Weapon class is derived, not stored: each record only carries a display
//! name, and the class is recovered by keyword matching against it.

use crate::codes::ParseError;

/// Weapon class categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponClass {
    /// 突击步枪
    AssaultRifle,
    /// 冲锋枪
    Smg,
    /// 射手步枪
    Dmr,
    /// 手枪
    Pistol,
    /// 狙击
    Sniper,
    /// 机枪
    MachineGun,
    /// 霰弹枪
    Shotgun,
    /// 弓弩
    Bow,
    /// 其他
    Other,
}

impl WeaponClass {
    /// All class variants
    pub const ALL: &'static [WeaponClass] = &[
        WeaponClass::AssaultRifle,
        WeaponClass::Smg,
        WeaponClass::Dmr,
        WeaponClass::Pistol,
        WeaponClass::Sniper,
        WeaponClass::MachineGun,
        WeaponClass::Shotgun,
        WeaponClass::Bow,
        WeaponClass::Other,
    ];
}

impl std::fmt::Display for WeaponClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AssaultRifle => write!(f, "突击步枪"),
            Self::Smg => write!(f, "冲锋枪"),
            Self::Dmr => write!(f, "射手步枪"),
            Self::Pistol => write!(f, "手枪"),
            Self::Sniper => write!(f, "狙击"),
            Self::MachineGun => write!(f, "机枪"),
            Self::Shotgun => write!(f, "霰弹枪"),
            Self::Bow => write!(f, "弓弩"),
            Self::Other => write!(f, "其他"),
        }
    }
}

impl std::str::FromStr for WeaponClass {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "突击步枪" | "ar" | "assault_rifle" => Ok(Self::AssaultRifle),
            "冲锋枪" | "smg" => Ok(Self::Smg),
            "射手步枪" | "dmr" => Ok(Self::Dmr),
            "手枪" | "pistol" => Ok(Self::Pistol),
            "狙击" | "sniper" => Ok(Self::Sniper),
            "机枪" | "mg" | "lmg" | "machine_gun" => Ok(Self::MachineGun),
            "霰弹枪" | "shotgun" => Ok(Self::Shotgun),
            "弓弩" | "bow" => Ok(Self::Bow),
            "其他" | "other" => Ok(Self::Other),
            _ => Err(ParseError::InvalidWeaponClass(s.to_string())),
        }
    }
}

/// Keyword table, walked in declaration order with first match winning.
///
/// Order carries the precedence: several keywords are substrings of each
/// other ("M4A1" before "M4"), so entries must not be reordered. Keywords
/// are stored uppercased; names are uppercased before matching.
const KEYWORD_TABLE: &[(&str, WeaponClass)] = &[
    // Assault rifles
    ("M4A1", WeaponClass::AssaultRifle),
    ("MK47", WeaponClass::AssaultRifle),
    ("K416", WeaponClass::AssaultRifle),
    ("KC17", WeaponClass::AssaultRifle),
    ("K437", WeaponClass::AssaultRifle),
    ("M4", WeaponClass::AssaultRifle),
    ("AS-VAL", WeaponClass::AssaultRifle),
    ("ASH-12", WeaponClass::AssaultRifle),
    ("SCAR-H", WeaponClass::AssaultRifle),
    ("AK-12", WeaponClass::AssaultRifle),
    ("AK-47", WeaponClass::AssaultRifle),
    ("FAMAS", WeaponClass::AssaultRifle),
    ("AUG", WeaponClass::AssaultRifle),
    ("QBZ", WeaponClass::AssaultRifle),
    ("QBZ-95", WeaponClass::AssaultRifle),
    ("TYPE-20", WeaponClass::AssaultRifle),
    // SMGs
    ("MP5", WeaponClass::Smg),
    ("MP7", WeaponClass::Smg),
    ("MPX", WeaponClass::Smg),
    ("P90", WeaponClass::Smg),
    ("VECTOR", WeaponClass::Smg),
    ("UZI", WeaponClass::Smg),
    ("MAC-10", WeaponClass::Smg),
    ("SKORPION", WeaponClass::Smg),
    // Marksman rifles
    ("M14", WeaponClass::Dmr),
    ("MK14", WeaponClass::Dmr),
    ("SR-25", WeaponClass::Dmr),
    ("G28", WeaponClass::Dmr),
    ("SCAR-HSSR", WeaponClass::Dmr),
    ("DMR", WeaponClass::Dmr),
    ("SVD", WeaponClass::Dmr),
    // Pistols
    ("M1911", WeaponClass::Pistol),
    ("GLOCK", WeaponClass::Pistol),
    ("P226", WeaponClass::Pistol),
    ("DESERTEAGLE", WeaponClass::Pistol),
    ("REX", WeaponClass::Pistol),
    ("MAGNUM", WeaponClass::Pistol),
    ("M9", WeaponClass::Pistol),
    ("93R", WeaponClass::Pistol),
    // Snipers
    ("AWM", WeaponClass::Sniper),
    ("M200", WeaponClass::Sniper),
    ("M24", WeaponClass::Sniper),
    ("KAR98K", WeaponClass::Sniper),
    ("MOSIN", WeaponClass::Sniper),
    ("LEE-ENFIELD", WeaponClass::Sniper),
    ("LYNX", WeaponClass::Sniper),
    ("TAC-50", WeaponClass::Sniper),
    ("MARLIN", WeaponClass::Sniper),
    // Machine guns
    ("M250", WeaponClass::MachineGun),
    ("M249", WeaponClass::MachineGun),
    ("PKM", WeaponClass::MachineGun),
    ("MG42", WeaponClass::MachineGun),
    // Shotguns
    ("M870", WeaponClass::Shotgun),
    ("S12K", WeaponClass::Shotgun),
    ("DBS", WeaponClass::Shotgun),
    ("SHORTY", WeaponClass::Shotgun),
    ("ORIGIN-12", WeaponClass::Shotgun),
    ("AA-12", WeaponClass::Shotgun),
    // Bows
    ("CROSSBOW", WeaponClass::Bow),
    ("COMPOUNDBOW", WeaponClass::Bow),
    ("ARBALIST", WeaponClass::Bow),
];

/// Fallback substring rules for names with no keyword hit, also first match
/// wins. The generic rifle rule goes last so it cannot shadow the rest.
const FALLBACK_RULES: &[(&[&str], WeaponClass)] = &[
    (&["冲锋枪", "SMG"], WeaponClass::Smg),
    (&["射手步枪", "DMR"], WeaponClass::Dmr),
    (&["手枪", "PISTOL"], WeaponClass::Pistol),
    (&["狙击", "SNIPER"], WeaponClass::Sniper),
    (&["机枪", "MACHINEGUN", "LMG"], WeaponClass::MachineGun),
    (&["霰弹枪", "SHOTGUN"], WeaponClass::Shotgun),
    (&["弓", "CROSSBOW", "ARBALIST"], WeaponClass::Bow),
    (&["步枪", "RIFLE"], WeaponClass::AssaultRifle),
];

/// Infer the weapon class from a display name.
///
/// Pure and total: unmatched names come back as [`WeaponClass::Other`].
pub fn classify(name: &str) -> WeaponClass {
    let upper = name.to_uppercase();

    for (keyword, class) in KEYWORD_TABLE {
        if upper.contains(keyword) {
            return *class;
        }
    }

    for (needles, class) in FALLBACK_RULES {
        if needles.iter().any(|needle| upper.contains(needle)) {
            return *class;
        }
    }

    WeaponClass::Other
}

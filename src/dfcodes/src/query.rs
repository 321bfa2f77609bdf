//! Filter, group, and sort weapon codes into the displayed view
//!
//! A query is a pure pass over a record snapshot: mode filter, optional
//! weapon-class filter, optional text search, then grouping by weapon name
//! and a two-level tier/name sort of the groups. Records are only borrowed;
//! nothing is mutated.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::classify::{classify, WeaponClass};
use crate::codes::{has_tier, tier_priority, Mode, WeaponCode};
use crate::collate::compare_names;

/// Caller-selected filters for one query
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    /// Game mode, always required
    pub mode: Mode,
    /// Weapon class, `None` matches any
    pub class: Option<WeaponClass>,
    /// Search text; empty disables the text stage
    pub search: String,
}

impl Criteria {
    /// Criteria matching every record of the given mode
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            class: None,
            search: String::new(),
        }
    }
}

/// All filtered records sharing one weapon name, in input order
#[derive(Debug, Clone)]
pub struct WeaponGroup<'a> {
    pub name: &'a str,
    pub codes: Vec<&'a WeaponCode>,
}

impl WeaponGroup<'_> {
    /// Tier label of the group's first record (drives the group sort)
    pub fn tier(&self) -> &str {
        self.codes.first().map(|c| c.tier.as_str()).unwrap_or("")
    }
}

/// Filter `codes` by `criteria`, group by weapon name, and sort the groups.
///
/// Groups with a ranked tier come first (T0 before T1 before T2, unknown
/// labels after all of those); unranked groups go last. Ties break by
/// pinyin name order. Within a group, records keep their input order.
pub fn query<'a>(codes: &'a [WeaponCode], criteria: &Criteria) -> Vec<WeaponGroup<'a>> {
    let needle = criteria.search.to_lowercase();

    let mut groups: Vec<WeaponGroup<'a>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for code in codes {
        if code.mode != criteria.mode {
            continue;
        }
        if let Some(class) = criteria.class {
            if classify(&code.name) != class {
                continue;
            }
        }
        if !needle.is_empty() && !matches_search(code, &needle) {
            continue;
        }

        match index.get(code.name.as_str()) {
            Some(&at) => groups[at].codes.push(code),
            None => {
                index.insert(&code.name, groups.len());
                groups.push(WeaponGroup {
                    name: &code.name,
                    codes: vec![code],
                });
            }
        }
    }

    groups.sort_by(compare_groups);
    groups
}

/// Case-folded substring search across name, build, code, and tier
fn matches_search(code: &WeaponCode, needle: &str) -> bool {
    code.name.to_lowercase().contains(needle)
        || code.build.to_lowercase().contains(needle)
        || code.code.to_lowercase().contains(needle)
        || code.tier.to_lowercase().contains(needle)
}

fn compare_groups(a: &WeaponGroup, b: &WeaponGroup) -> Ordering {
    let tier_a = a.tier();
    let tier_b = b.tier();

    match (has_tier(tier_a), has_tier(tier_b)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => tier_priority(tier_a)
            .cmp(&tier_priority(tier_b))
            .then_with(|| compare_names(a.name, b.name)),
        (false, false) => compare_names(a.name, b.name),
    }
}

/// Distinct modes present in `codes`, in encounter order
pub fn unique_modes(codes: &[WeaponCode]) -> Vec<Mode> {
    let mut modes = Vec::new();
    for code in codes {
        if !modes.contains(&code.mode) {
            modes.push(code.mode);
        }
    }
    modes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::Source;

    fn make_code(name: &str, mode: Mode, tier: &str) -> WeaponCode {
        WeaponCode {
            id: format!("id-{name}-{tier}"),
            mode,
            name: name.to_string(),
            tier: tier.to_string(),
            price: None,
            build: String::new(),
            code: String::new(),
            range: None,
            update_time: None,
            source: Source::DaoZai,
        }
    }

    fn names<'a>(groups: &[WeaponGroup<'a>]) -> Vec<&'a str> {
        groups.iter().map(|g| g.name).collect()
    }

    #[test]
    fn test_mode_filter() {
        let codes = vec![
            make_code("M4A1", Mode::Operations, "T0"),
            make_code("AWM", Mode::Warfare, "T0"),
        ];
        let groups = query(&codes, &Criteria::new(Mode::Operations));
        assert_eq!(names(&groups), vec!["M4A1"]);
    }

    #[test]
    fn test_class_filter() {
        let codes = vec![
            make_code("M4A1", Mode::Operations, "T0"),
            make_code("MP5", Mode::Operations, "T0"),
            make_code("AWM", Mode::Operations, "T0"),
        ];
        let criteria = Criteria {
            mode: Mode::Operations,
            class: Some(WeaponClass::Smg),
            search: String::new(),
        };
        assert_eq!(names(&query(&codes, &criteria)), vec!["MP5"]);
    }

    #[test]
    fn test_search_across_fields() {
        let mut with_build = make_code("M4A1", Mode::Operations, "T0");
        with_build.build = "满改连狙".to_string();
        let mut with_code = make_code("AWM", Mode::Operations, "T0");
        with_code.code = "XJ7K".to_string();
        let plain = make_code("MP5", Mode::Operations, "T0");

        let codes = vec![with_build, with_code, plain];

        let criteria = Criteria {
            mode: Mode::Operations,
            class: None,
            search: "连狙".to_string(),
        };
        assert_eq!(names(&query(&codes, &criteria)), vec!["M4A1"]);

        // Case-folded match against the code field
        let criteria = Criteria {
            search: "xj7k".to_string(),
            ..criteria
        };
        assert_eq!(names(&query(&codes, &criteria)), vec!["AWM"]);
    }

    #[test]
    fn test_search_matches_tier_field() {
        let codes = vec![
            make_code("M4A1", Mode::Operations, "T1"),
            make_code("AWM", Mode::Operations, "T0"),
        ];
        let criteria = Criteria {
            mode: Mode::Operations,
            class: None,
            search: "t1".to_string(),
        };
        assert_eq!(names(&query(&codes, &criteria)), vec!["M4A1"]);
    }

    #[test]
    fn test_grouping_conserves_records_and_order() {
        let mut first = make_code("M4A1", Mode::Operations, "T0");
        first.id = "a".to_string();
        let mut second = make_code("M4A1", Mode::Operations, "T0");
        second.id = "b".to_string();
        let other = make_code("AWM", Mode::Operations, "T1");

        let codes = vec![first, other, second];
        let groups = query(&codes, &Criteria::new(Mode::Operations));

        let total: usize = groups.iter().map(|g| g.codes.len()).sum();
        assert_eq!(total, 3);

        let m4 = groups.iter().find(|g| g.name == "M4A1").unwrap();
        let ids: Vec<&str> = m4.codes.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_tier_ordering() {
        let codes = vec![
            make_code("A", Mode::Operations, "T1"),
            make_code("B", Mode::Operations, "T0"),
            make_code("C", Mode::Operations, ""),
            make_code("D", Mode::Operations, "T2"),
        ];
        let groups = query(&codes, &Criteria::new(Mode::Operations));
        let tiers: Vec<&str> = groups.iter().map(|g| g.tier()).collect();
        assert_eq!(tiers, vec!["T0", "T1", "T2", ""]);
    }

    #[test]
    fn test_unmapped_tier_sorts_after_mapped_but_before_unranked() {
        let codes = vec![
            make_code("A", Mode::Operations, "T9"),
            make_code("B", Mode::Operations, "-"),
            make_code("C", Mode::Operations, "T2"),
        ];
        let groups = query(&codes, &Criteria::new(Mode::Operations));
        let tiers: Vec<&str> = groups.iter().map(|g| g.tier()).collect();
        assert_eq!(tiers, vec!["T2", "T9", "-"]);
    }

    #[test]
    fn test_name_tie_break_uses_pinyin_order() {
        // Both T1: 蝰蛇 (kui...) before 腾龙 (teng...), the reverse of
        // their raw code-point order
        let codes = vec![
            make_code("腾龙", Mode::Operations, "T1"),
            make_code("蝰蛇", Mode::Operations, "T1"),
        ];
        let groups = query(&codes, &Criteria::new(Mode::Operations));
        assert_eq!(names(&groups), vec!["蝰蛇", "腾龙"]);
    }

    #[test]
    fn test_unranked_groups_tie_break_by_name() {
        let codes = vec![
            make_code("腾龙", Mode::Operations, "-"),
            make_code("蝰蛇", Mode::Operations, "null"),
        ];
        let groups = query(&codes, &Criteria::new(Mode::Operations));
        assert_eq!(names(&groups), vec!["蝰蛇", "腾龙"]);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let codes = vec![
            make_code("M4A1-A", Mode::Operations, "T1"),
            make_code("AWM-B", Mode::Operations, "T0"),
            make_code("MP5-C", Mode::Warfare, "T2"),
        ];
        let groups = query(&codes, &Criteria::new(Mode::Operations));
        assert_eq!(names(&groups), vec!["AWM-B", "M4A1-A"]);
        assert_eq!(groups[0].tier(), "T0");
        assert_eq!(groups[1].tier(), "T1");
    }

    #[test]
    fn test_empty_input() {
        let groups = query(&[], &Criteria::new(Mode::Operations));
        assert!(groups.is_empty());
    }

    #[test]
    fn test_unique_modes() {
        let codes = vec![
            make_code("A", Mode::Warfare, "T0"),
            make_code("B", Mode::Operations, "T0"),
            make_code("C", Mode::Warfare, "T1"),
        ];
        assert_eq!(unique_modes(&codes), vec![Mode::Warfare, Mode::Operations]);
    }
}

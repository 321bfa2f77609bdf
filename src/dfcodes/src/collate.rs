//! Chinese collation for weapon name ordering
//!
//! Weapon names are sorted in pinyin dictionary order, which raw code-point
//! comparison gets wrong for Han characters. The comparison is backed by an
//! ICU4X collator for the `zh` locale, built once per process.

use std::cmp::Ordering;
use std::sync::OnceLock;

use icu::collator::{Collator, CollatorOptions, Strength};
use icu::locid::locale;

static ZH_COLLATOR: OnceLock<Collator> = OnceLock::new();

fn zh_collator() -> &'static Collator {
    ZH_COLLATOR.get_or_init(|| {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        // Infallible: zh collation data is compiled into the binary
        Collator::try_new(&locale!("zh").into(), options)
            .expect("compiled collation data for zh")
    })
}

/// Compare two weapon names in zh-CN (pinyin) order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    zh_collator().compare(a, b)
}

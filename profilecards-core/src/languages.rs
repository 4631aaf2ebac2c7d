//! Language aggregation and percentage normalization.

use std::cmp::Ordering;

use crate::domain::{LanguageBytes, LanguageTotals, NormalizedEntry};

/// Label of the bucket that collects languages below the threshold.
pub const OTHER_LABEL: &str = "Other";

/// Default minimum share, in percent, for a language to be listed on its own.
pub const DEFAULT_THRESHOLD: f64 = 1.0;

/// Sum per-repository language maps into one total per language.
///
/// Only maps from repositories that answered belong here; a failed fetch is
/// dropped by the caller rather than passed in as an empty map.
pub fn aggregate<I>(maps: I) -> LanguageTotals
where
    I: IntoIterator<Item = LanguageBytes>,
{
    let mut totals = LanguageTotals::new();
    for map in maps {
        for (language, bytes) in map {
            let entry = totals.entry(language).or_insert(0);
            *entry = entry.saturating_add(bytes);
        }
    }
    totals
}

/// Convert byte totals into an ordered list of percentage entries.
///
/// Languages whose share is strictly below `threshold_pct` are folded into a
/// single [`OTHER_LABEL`] entry. The result is sorted by descending bytes,
/// ties by label. Returns an empty list when the total is zero.
pub fn normalize(totals: &LanguageTotals, threshold_pct: f64) -> Vec<NormalizedEntry> {
    let total = totals
        .values()
        .fold(0u64, |acc, bytes| acc.saturating_add(*bytes));
    if total == 0 {
        return Vec::new();
    }

    let threshold = if threshold_pct.is_finite() {
        threshold_pct
    } else {
        0.0
    };

    let mut entries = Vec::with_capacity(totals.len() + 1);
    let mut collapsed = 0u64;
    for (label, &bytes) in totals {
        let percentage = share(bytes, total);
        if percentage < threshold {
            collapsed = collapsed.saturating_add(bytes);
        } else {
            entries.push(NormalizedEntry {
                label: label.clone(),
                percentage,
                bytes,
            });
        }
    }

    if collapsed > 0 {
        // A platform language literally named "Other" absorbs the bucket.
        match entries.iter_mut().find(|entry| entry.label == OTHER_LABEL) {
            Some(existing) => {
                existing.bytes = existing.bytes.saturating_add(collapsed);
                existing.percentage = share(existing.bytes, total);
            }
            None => entries.push(NormalizedEntry {
                label: OTHER_LABEL.to_string(),
                percentage: share(collapsed, total),
                bytes: collapsed,
            }),
        }
    }

    entries.sort_by(compare_entries);
    entries
}

fn compare_entries(a: &NormalizedEntry, b: &NormalizedEntry) -> Ordering {
    b.bytes.cmp(&a.bytes).then_with(|| a.label.cmp(&b.label))
}

fn share(bytes: u64, total: u64) -> f64 {
    let percentage = 100.0 * bytes as f64 / total as f64;
    if percentage.is_finite() {
        percentage.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

//! Size ordering: decide how a set of size labels ranks, then sort by it.
//!
//! Labels are either all numeric (`"9"`, `"10.5"`) and rank by value, or they
//! are free-text keywords (`"Small"`, `"XL"`) ranked by their position in a
//! [`SizeGroup`] of the configured [`SizeChart`].

use std::sync::LazyLock;

use catsync_core::{SizeChart, SizeGroup};
use regex::Regex;

use crate::sort::stable_merge_sort;

/// A label that is only digits with at most one decimal point.
static NUMERIC_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*\.?\d*$").expect("valid regex"));

/// Longest leading `int[.frac]` run.
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d*\.\d*|\d*)").expect("valid regex"));

/// How the labels of one option axis are ranked.
#[derive(Debug, Clone, Copy)]
pub enum SizeOrder<'c> {
    /// Every label is numeric; rank is the parsed value.
    Numeric,
    /// Keyword labels ranked by entry index in `group`. `None` when no label
    /// is in any group, in which case every label ranks equally.
    Keyword { group: Option<&'c SizeGroup> },
}

impl<'c> SizeOrder<'c> {
    /// Classifies `labels` and picks the ranking scheme.
    ///
    /// The keyword group is the chart group that knows the most labels;
    /// ties go to the earlier group. Label order plays no part.
    #[must_use]
    pub fn resolve<S: AsRef<str>>(labels: &[S], chart: &'c SizeChart) -> Self {
        if labels.iter().all(|l| is_numeric_label(l.as_ref())) {
            return SizeOrder::Numeric;
        }

        let group = chart.group_for(labels);
        if group.is_none() {
            tracing::warn!(
                first_label = labels.first().map_or("", |l| l.as_ref()),
                "no size chart group matches; keeping input order"
            );
        }
        SizeOrder::Keyword { group }
    }

    /// Rank of `label` under this scheme. Keyword labels missing from the
    /// group rank after every matched label.
    #[must_use]
    pub fn rank(&self, label: &str) -> f64 {
        match self {
            SizeOrder::Numeric => leading_number(label),
            SizeOrder::Keyword { group: None } => 0.0,
            SizeOrder::Keyword { group: Some(group) } => {
                let idx = group.rank_of(label).unwrap_or(group.sizes.len());
                usize_to_rank(idx)
            }
        }
    }
}

/// Returns `labels` in canonical size order.
#[must_use]
pub fn sort_size_labels(labels: &[String], chart: &SizeChart) -> Vec<String> {
    let order = SizeOrder::resolve(labels, chart);
    stable_merge_sort(labels, |label| order.rank(label))
}

fn is_numeric_label(label: &str) -> bool {
    NUMERIC_LABEL.is_match(label.trim())
}

/// Value of the leading numeric run; `0.0` when the label has none.
fn leading_number(label: &str) -> f64 {
    LEADING_NUMBER
        .captures(label.trim())
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn usize_to_rank(idx: usize) -> f64 {
    // Chart groups hold tens of entries; precision loss is unreachable.
    idx as f64
}

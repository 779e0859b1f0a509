//! Size chart configuration: ranked size names and their keyword aliases.
//!
//! The chart is an ordered list of groups (apparel letters, kids ages, ...).
//! Within a group, the position of an entry is its display rank.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeChart {
    pub size_chart_order: Vec<SizeGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeGroup {
    pub sizes: Vec<SizeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeEntry {
    /// Canonical size name, e.g. `"M"`.
    pub name: String,
    /// Case-insensitive aliases, e.g. `["m", "medium"]`.
    pub keywords: Vec<String>,
}

impl SizeEntry {
    /// Case-insensitive exact match of `label` against any alias.
    #[must_use]
    pub fn matches(&self, label: &str) -> bool {
        let label = label.trim().to_lowercase();
        self.keywords
            .iter()
            .any(|k| k.trim().to_lowercase() == label)
    }
}

impl SizeGroup {
    /// Index of the first entry whose aliases contain `label`.
    #[must_use]
    pub fn rank_of(&self, label: &str) -> Option<usize> {
        self.sizes.iter().position(|entry| entry.matches(label))
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.rank_of(label).is_some()
    }
}

impl SizeChart {
    /// The group that knows the most of `labels`. Ties go to the earlier
    /// group; `None` when no group knows any label.
    #[must_use]
    pub fn group_for<S: AsRef<str>>(&self, labels: &[S]) -> Option<&SizeGroup> {
        let mut best: Option<(usize, &SizeGroup)> = None;
        for group in &self.size_chart_order {
            let hits = labels.iter().filter(|l| group.contains(l.as_ref())).count();
            if hits > best.map_or(0, |(top, _)| top) {
                best = Some((hits, group));
            }
        }
        best.map(|(_, group)| group)
    }
}

/// Load and validate a size chart from disk.
///
/// Files ending in `.yaml`/`.yml` are parsed as YAML, anything else as JSON.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_size_chart(path: &Path) -> Result<SizeChart, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SizeChartIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let chart: SizeChart = if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| ConfigError::SizeChartParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?
    } else {
        serde_json::from_str(&content).map_err(|e| ConfigError::SizeChartParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?
    };

    validate_size_chart(&chart)?;

    Ok(chart)
}

fn validate_size_chart(chart: &SizeChart) -> Result<(), ConfigError> {
    if chart.size_chart_order.is_empty() {
        return Err(ConfigError::Validation(
            "size chart must contain at least one group".to_string(),
        ));
    }

    for (group_idx, group) in chart.size_chart_order.iter().enumerate() {
        for entry in &group.sizes {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "size group {group_idx} has an entry with an empty name"
                )));
            }
            if entry.keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(ConfigError::Validation(format!(
                    "size '{}' in group {group_idx} has no keywords",
                    entry.name
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn apparel_chart() -> SizeChart {
        serde_json::from_str(
            r#"{"size_chart_order": [
                {"sizes": [
                    {"name": "S", "keywords": ["s", "small"]},
                    {"name": "M", "keywords": ["m", "medium"]},
                    {"name": "L", "keywords": ["l", "large"]}
                ]},
                {"sizes": [
                    {"name": "2T", "keywords": ["2t", "toddler 2"]},
                    {"name": "3T", "keywords": ["3t", "toddler 3"]}
                ]}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn rank_of_is_case_insensitive() {
        let chart = apparel_chart();
        let group = &chart.size_chart_order[0];
        assert_eq!(group.rank_of("Large"), Some(2));
        assert_eq!(group.rank_of("SMALL"), Some(0));
        assert_eq!(group.rank_of(" m "), Some(1));
        assert_eq!(group.rank_of("XL"), None);
    }

    #[test]
    fn group_for_picks_group_knowing_most_labels() {
        let chart = apparel_chart();
        let group = chart.group_for(&["Toddler 3"]).expect("expected a group");
        assert_eq!(group.sizes[0].name, "2T");
        let group = chart.group_for(&["s", "2t", "3t"]).expect("expected a group");
        assert_eq!(group.sizes[0].name, "2T");
        assert!(chart.group_for(&["XXXL"]).is_none());
        assert!(chart.group_for::<&str>(&[]).is_none());
    }

    #[test]
    fn load_size_chart_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("size_chart.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(serde_json::to_string(&apparel_chart()).unwrap().as_bytes())
            .unwrap();

        let chart = load_size_chart(&path).unwrap();
        assert_eq!(chart, apparel_chart());
    }

    #[test]
    fn load_size_chart_reads_yaml_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("size_chart.yaml");
        std::fs::write(
            &path,
            "size_chart_order:\n  - sizes:\n      - name: S\n        keywords: [s, small]\n",
        )
        .unwrap();

        let chart = load_size_chart(&path).unwrap();
        assert_eq!(chart.size_chart_order[0].rank_of("small"), Some(0));
    }

    #[test]
    fn load_size_chart_missing_file_is_io_error() {
        let err = load_size_chart(Path::new("/nonexistent/size_chart.json")).unwrap_err();
        assert!(matches!(err, ConfigError::SizeChartIo { .. }));
    }

    #[test]
    fn load_size_chart_bad_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("size_chart.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_size_chart(&path).unwrap_err();
        assert!(matches!(err, ConfigError::SizeChartParse { .. }));
    }

    #[test]
    fn validate_rejects_empty_chart() {
        let err = validate_size_chart(&SizeChart::default()).unwrap_err();
        assert!(err.to_string().contains("at least one group"));
    }

    #[test]
    fn validate_rejects_entry_without_keywords() {
        let chart = SizeChart {
            size_chart_order: vec![SizeGroup {
                sizes: vec![SizeEntry {
                    name: "XL".to_string(),
                    keywords: vec!["  ".to_string()],
                }],
            }],
        };
        let err = validate_size_chart(&chart).unwrap_err();
        assert!(err.to_string().contains("'XL'"));
    }
}

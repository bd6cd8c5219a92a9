//! Test application selection.
//!
//! A sample declares the entry-point applications its tests run. The build
//! runner asks for them one index at a time and stops when nothing is
//! printed, so an out-of-range index is not an error.

use crate::manifest::SampleRecord;

/// The test application name at `index` for a sample, or `None` when the
/// index is out of range. A sample without a `test_app` field exposes the
/// single synthesized name `test_<sample>`.
pub fn select(record: &SampleRecord, sample: &str, index: usize) -> Option<String> {
    record.test_apps(sample).get(index).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::OneOrMany;

    fn record_with_apps(apps: &[&str]) -> SampleRecord {
        SampleRecord {
            test_app: Some(OneOrMany::Many(apps.iter().map(|s| s.to_string()).collect())),
            ..SampleRecord::default()
        }
    }

    #[test]
    fn selects_app_at_index() {
        let record = record_with_apps(&["a", "b"]);
        assert_eq!(select(&record, "sample", 0).as_deref(), Some("a"));
        assert_eq!(select(&record, "sample", 1).as_deref(), Some("b"));
    }

    #[test]
    fn out_of_range_index_selects_nothing() {
        let record = record_with_apps(&["a", "b"]);
        assert_eq!(select(&record, "sample", 2), None);
    }

    #[test]
    fn missing_test_app_synthesizes_name() {
        let record = SampleRecord::default();
        assert_eq!(select(&record, "foo", 0).as_deref(), Some("test_foo"));
        assert_eq!(select(&record, "foo", 1), None);
    }

    #[test]
    fn single_string_test_app_is_one_entry() {
        let record = SampleRecord {
            test_app: Some(OneOrMany::One("gui:main".to_string())),
            ..SampleRecord::default()
        };
        assert_eq!(select(&record, "sample", 0).as_deref(), Some("gui:main"));
        assert_eq!(select(&record, "sample", 1), None);
    }
}

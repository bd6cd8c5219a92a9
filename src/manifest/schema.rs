//! Manifest record types.

use serde::Deserialize;

/// A manifest field that may be written as a single string or a list.
///
/// `platform` and `requirements` treat a single string as comma-separated;
/// `test_app` treats it as one entry. The two interpretations are separate
/// accessors so each field keeps its own semantics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Expand into a list, splitting a single string on commas.
    pub fn split_csv(&self) -> Vec<String> {
        match self {
            OneOrMany::One(s) => s.split(',').map(|p| p.trim().to_string()).collect(),
            OneOrMany::Many(list) => list.clone(),
        }
    }

    /// Expand into a list, treating a single string as one item.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            OneOrMany::One(s) => vec![s.clone()],
            OneOrMany::Many(list) => list.clone(),
        }
    }
}

/// One entry from the sample manifest. All fields are optional; a sample
/// missing from the manifest behaves as an all-default record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SampleRecord {
    /// Platform tags the sample is restricted to (supports `!` negation).
    pub platform: Option<OneOrMany>,

    /// Requirement strings to install before running the sample.
    pub requirements: Option<OneOrMany>,

    /// Test application entry-point names.
    pub test_app: Option<OneOrMany>,
}

impl SampleRecord {
    /// Platform tags, empty when unrestricted.
    pub fn platforms(&self) -> Vec<String> {
        self.platform
            .as_ref()
            .map(OneOrMany::split_csv)
            .unwrap_or_default()
    }

    /// Declared requirement strings.
    pub fn requirements(&self) -> Vec<String> {
        self.requirements
            .as_ref()
            .map(OneOrMany::split_csv)
            .unwrap_or_default()
    }

    /// Test application names, defaulting to the synthesized `test_<sample>`.
    pub fn test_apps(&self, sample: &str) -> Vec<String> {
        match &self.test_app {
            Some(apps) => apps.to_vec(),
            None => vec![format!("test_{sample}")],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_or_many_splits_csv_string() {
        let v = OneOrMany::One("linux, !win32".to_string());
        assert_eq!(v.split_csv(), vec!["linux", "!win32"]);
    }

    #[test]
    fn one_or_many_keeps_single_string_whole() {
        let v = OneOrMany::One("gui:main,console".to_string());
        assert_eq!(v.to_vec(), vec!["gui:main,console"]);
    }

    #[test]
    fn one_or_many_passes_lists_through() {
        let v = OneOrMany::Many(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(v.split_csv(), vec!["a", "b"]);
        assert_eq!(v.to_vec(), vec!["a", "b"]);
    }

    #[test]
    fn record_deserializes_string_fields() {
        let record: SampleRecord = serde_json::from_str(
            r#"{
                "platform": "linux,darwin",
                "requirements": "numpy,pandas",
                "test_app": "test_main"
            }"#,
        )
        .unwrap();

        assert_eq!(record.platforms(), vec!["linux", "darwin"]);
        assert_eq!(record.requirements(), vec!["numpy", "pandas"]);
        assert_eq!(record.test_apps("sample"), vec!["test_main"]);
    }

    #[test]
    fn record_deserializes_list_fields() {
        let record: SampleRecord = serde_json::from_str(
            r#"{
                "platform": ["!mingw"],
                "requirements": ["numpy --no-deps", "pandas"],
                "test_app": ["a", "b"]
            }"#,
        )
        .unwrap();

        assert_eq!(record.platforms(), vec!["!mingw"]);
        assert_eq!(record.requirements(), vec!["numpy --no-deps", "pandas"]);
        assert_eq!(record.test_apps("sample"), vec!["a", "b"]);
    }

    #[test]
    fn empty_record_has_defaults() {
        let record: SampleRecord = serde_json::from_str("{}").unwrap();
        assert!(record.platforms().is_empty());
        assert!(record.requirements().is_empty());
    }

    #[test]
    fn missing_test_app_synthesizes_name() {
        let record = SampleRecord::default();
        assert_eq!(record.test_apps("foo"), vec!["test_foo"]);
    }
}

use serde::{Deserialize, Serialize};

/// What `to_dictionary_with` does when a key is produced a second time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeyPolicy {
    /// Fail with `SequenceError::DuplicateKey`.
    #[default]
    Reject,
    /// Keep the element that produced the key first.
    KeepFirst,
    /// Replace the stored element with the later one.
    KeepLast,
}

/// Settings for building a dictionary from a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionarySettings {
    /// How repeated keys are handled.
    pub duplicate_keys: DuplicateKeyPolicy,

    /// Initial capacity of the map. Zero sizes it from the buffered source.
    pub capacity: usize,
}

impl Default for DictionarySettings {
    fn default() -> Self {
        Self {
            duplicate_keys: DuplicateKeyPolicy::Reject,
            capacity: 0,
        }
    }
}

impl DictionarySettings {
    /// Creates a new instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicate_keys(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_keys = policy;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rejects_duplicates() {
        let settings = DictionarySettings::new();
        assert_eq!(settings.duplicate_keys, DuplicateKeyPolicy::Reject);
        assert_eq!(settings.capacity, 0);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: DictionarySettings =
            serde_json::from_str(r#"{ "duplicate_keys": "keep_last" }"#).unwrap();
        assert_eq!(settings.duplicate_keys, DuplicateKeyPolicy::KeepLast);
        assert_eq!(settings.capacity, 0);
    }

    #[test]
    fn builder_methods_override_fields() {
        let settings = DictionarySettings::new()
            .with_duplicate_keys(DuplicateKeyPolicy::KeepFirst)
            .with_capacity(64);
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            serde_json::json!({ "duplicate_keys": "keep_first", "capacity": 64 })
        );
    }
}

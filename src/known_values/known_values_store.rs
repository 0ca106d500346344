use std::collections::HashMap;

use super::KnownValue;

/// A lookup table translating between raw known-value integers and their
/// assigned names.
///
/// Used by the formatters in [`crate::format`] to print known predicates as
/// e.g. `isA` instead of bare integers, and to parse them back out of the
/// debug notation.
#[derive(Clone, Debug)]
pub struct KnownValuesStore {
    by_raw_value: HashMap<u64, KnownValue>,
    by_assigned_name: HashMap<String, KnownValue>,
}

impl KnownValuesStore {
    pub fn new<T>(known_values: T) -> Self
    where
        T: IntoIterator<Item = KnownValue>,
    {
        let mut by_raw_value = HashMap::new();
        let mut by_assigned_name = HashMap::new();
        for known_value in known_values {
            Self::insert_into(known_value, &mut by_raw_value, &mut by_assigned_name);
        }
        Self { by_raw_value, by_assigned_name }
    }

    pub fn insert(&mut self, known_value: KnownValue) {
        Self::insert_into(known_value, &mut self.by_raw_value, &mut self.by_assigned_name);
    }

    pub fn assigned_name(&self, known_value: &KnownValue) -> Option<&str> {
        self.by_raw_value.get(&known_value.value()).and_then(|k| k.assigned_name())
    }

    pub fn name(&self, known_value: &KnownValue) -> String {
        self.assigned_name(known_value).map(str::to_string).unwrap_or_else(|| known_value.name())
    }

    pub fn known_value_named(&self, assigned_name: &str) -> Option<&KnownValue> {
        self.by_assigned_name.get(assigned_name)
    }

    fn insert_into(
        known_value: KnownValue,
        by_raw_value: &mut HashMap<u64, KnownValue>,
        by_assigned_name: &mut HashMap<String, KnownValue>,
    ) {
        by_raw_value.insert(known_value.value(), known_value.clone());
        if let Some(name) = known_value.assigned_name() {
            by_assigned_name.insert(name.to_string(), known_value);
        }
    }
}

impl Default for KnownValuesStore {
    fn default() -> Self {
        Self::new([])
    }
}

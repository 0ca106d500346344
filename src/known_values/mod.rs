//! The well-known-value namespace: compact integer predicates shared by
//! convention rather than encoded as strings.

mod known_value;
mod known_values_store;

use std::sync::{Mutex, Once};

pub use known_value::KnownValue;
pub use known_values_store::KnownValuesStore;
use paste::paste;

macro_rules! known_value_constant {
    ($const_name:ident, $value:expr, $name:expr) => {
        paste! {
            pub const [<$const_name _VALUE>]: u64 = $value;
        }
        pub const $const_name: KnownValue = KnownValue::new_with_static_name($value, $name);
    };
}

known_value_constant!(ID, 1, "id");
known_value_constant!(IS_A, 2, "isA");
known_value_constant!(VERIFIED_BY, 3, "verifiedBy");
known_value_constant!(NOTE, 4, "note");
known_value_constant!(HAS_RECIPIENT, 5, "hasRecipient");
known_value_constant!(SALT, 15, "salt");
known_value_constant!(DATE, 16, "date");

pub(crate) struct LazyKnownValues {
    init: Once,
    data: Mutex<Option<KnownValuesStore>>,
}

impl LazyKnownValues {
    pub(crate) fn get(&self) -> std::sync::MutexGuard<'_, Option<KnownValuesStore>> {
        self.init.call_once(|| {
            let store = KnownValuesStore::new([
                ID,
                IS_A,
                VERIFIED_BY,
                NOTE,
                HAS_RECIPIENT,
                SALT,
                DATE,
            ]);
            *self.data.lock().unwrap() = Some(store);
        });
        self.data.lock().unwrap()
    }
}

pub(crate) static KNOWN_VALUES: LazyKnownValues = LazyKnownValues { init: Once::new(), data: Mutex::new(None) };

/// Looks up the assigned name for a known value, falling back to its decimal
/// value if the registry has no entry for it.
pub fn name_for(known_value: &KnownValue) -> String {
    let guard = KNOWN_VALUES.get();
    guard.as_ref().map(|store| store.name(known_value)).unwrap_or_else(|| known_value.name())
}

/// Looks up a known value by its assigned name.
pub fn known_value_named(name: &str) -> Option<KnownValue> {
    let guard = KNOWN_VALUES.get();
    guard.as_ref().and_then(|store| store.known_value_named(name)).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves_assigned_names() {
        assert_eq!(IS_A.value(), 2);
        assert_eq!(name_for(&IS_A), "isA");
        assert_eq!(known_value_named("isA").unwrap().value(), 2);
        assert!(known_value_named("nonexistent").is_none());
    }

    #[test]
    fn unregistered_value_falls_back_to_its_number() {
        let unregistered = KnownValue::new(9999);
        assert_eq!(name_for(&unregistered), "9999");
    }
}

use std::collections::HashMap;

use crate::interpreter::value::Value;

/// A mapping from names to the values bound to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    store: HashMap<String, Value>,
}

impl Environment {
    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.store.get(name).copied()
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }

    /// All bindings, sorted by name.
    #[must_use]
    pub fn bindings(&self) -> Vec<(&str, Value)> {
        let mut bindings: Vec<(&str, Value)> =
            self.store.iter().map(|(name, value)| (name.as_str(), *value)).collect();
        bindings.sort_unstable_by_key(|(name, _)| *name);
        bindings
    }

    /// Returns `true` when nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.store.clear();
    }
}

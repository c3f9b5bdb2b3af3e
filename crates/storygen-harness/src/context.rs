//! Per-scenario shared state

use crate::error::{HarnessError, HarnessResult};
use crate::harness::MultiServiceHarness;
use dashmap::DashMap;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Key/value store shared by the steps of one scenario
#[derive(Debug, Default)]
pub struct ScenarioContext {
    values: DashMap<String, Value>,
    harness: RwLock<Option<Arc<MultiServiceHarness>>>,
}

impl ScenarioContext {
    /// Empty context
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Stored value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).map(|entry| entry.value().clone())
    }

    /// Stored value converted to `T`
    ///
    /// # Errors
    /// [`HarnessError::ContextValue`] if the value has a different shape
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> HarnessResult<Option<T>> {
        self.get(key)
            .map(|value| {
                serde_json::from_value(value).map_err(|e| HarnessError::ContextValue {
                    key: key.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    }

    /// Check if a key is set
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Register the scenario's harness
    pub fn set_harness(&self, harness: Arc<MultiServiceHarness>) {
        *self.harness.write() = Some(harness);
    }

    /// Registered harness
    ///
    /// # Errors
    /// [`HarnessError::HarnessNotRegistered`] before [`Self::set_harness`]
    pub fn harness(&self) -> HarnessResult<Arc<MultiServiceHarness>> {
        self.harness
            .read()
            .clone()
            .ok_or(HarnessError::HarnessNotRegistered)
    }

    /// Remove every stored value; the harness stays registered
    pub fn clear(&self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn values_round_trip() {
        let context = ScenarioContext::new();
        context.set("applicantId", "a-1");
        context.set("age", 121);

        assert_eq!(context.get("applicantId"), Some(json!("a-1")));
        assert_eq!(context.get_as::<u32>("age"), Ok(Some(121)));
        assert_eq!(context.get_as::<u32>("missing"), Ok(None));
        assert!(matches!(
            context.get_as::<u32>("applicantId"),
            Err(HarnessError::ContextValue { .. })
        ));
    }

    #[test]
    fn clear_keeps_harness() {
        let context = ScenarioContext::new();
        assert_eq!(context.harness().unwrap_err(), HarnessError::HarnessNotRegistered);

        context.set_harness(Arc::new(MultiServiceHarness::new(["ledger"], ["posted"])));
        context.set("k", true);
        context.clear();

        assert!(!context.contains_key("k"));
        assert_eq!(context.harness().unwrap().configured_services(), ["ledger"]);
    }

    #[test]
    fn shared_across_threads() {
        let context = Arc::new(ScenarioContext::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let context = Arc::clone(&context);
                std::thread::spawn(move || context.set(format!("k{i}"), i))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!((0..4).all(|i| context.contains_key(&format!("k{i}"))));
    }
}

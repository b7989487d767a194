use super::KeyValueStore;
use crate::error::{BiverseError, Result};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    simulate_read_error: bool,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Enable read error simulation for testing fallbacks.
    pub fn set_simulate_read_error(&mut self, simulate: bool) {
        self.simulate_read_error = simulate;
    }

    /// Seed a raw value, bypassing the write error switch.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.simulate_read_error {
            return Err(BiverseError::Persistence("Simulated read error".to_string()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(BiverseError::Persistence(
                "Simulated write error".to_string(),
            ));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

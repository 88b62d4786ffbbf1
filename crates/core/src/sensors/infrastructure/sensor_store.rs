use std::collections::HashMap;
use std::sync::Mutex;

use crate::sensors::domain::channel::{SensorChannel, SensorValue};
use crate::sensors::domain::listener::SensorListener;

/// Latest-value store polled by the scripting runtime.
///
/// Each emission overwrites the previous value for its channel. Reads and
/// writes are lock-guarded: the runtime polls from its own thread while the
/// camera pipeline emits.
pub struct SensorStore {
    values: Mutex<HashMap<SensorChannel, SensorValue>>,
}

impl SensorStore {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, channel: SensorChannel) -> Option<SensorValue> {
        self.lock().get(&channel).cloned()
    }

    pub fn number(&self, channel: SensorChannel) -> Option<f32> {
        self.get(channel).and_then(|v| v.as_number())
    }

    pub fn text(&self, channel: SensorChannel) -> Option<String> {
        self.get(channel)
            .and_then(|v| v.as_text().map(str::to_string))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// All current values, sorted by channel name for stable output.
    pub fn snapshot(&self) -> Vec<(SensorChannel, SensorValue)> {
        let mut entries: Vec<_> = self
            .lock()
            .iter()
            .map(|(c, v)| (*c, v.clone()))
            .collect();
        entries.sort_by_key(|(c, _)| c.as_str());
        entries
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<SensorChannel, SensorValue>> {
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for SensorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorListener for SensorStore {
    fn on_sensor_changed(&self, channel: SensorChannel, value: &SensorValue) {
        self.lock().insert(channel, value.clone());
    }
}

use std::sync::{Arc, Mutex};

use super::channel::{SensorChannel, SensorValue};
use super::listener::SensorListener;

/// Deduplicated set of sensor listeners with synchronous broadcast.
///
/// Membership is pointer identity on the `Arc`, so `add_listener` is
/// idempotent for the same handle. The set is lock-guarded: listeners may be
/// registered from a UI thread while frames are processed on a worker
/// thread. Broadcasts run against a snapshot taken under the lock, so a
/// listener may itself register or remove listeners without deadlocking;
/// such changes take effect from the next emission on.
pub struct ListenerRegistry {
    listeners: Mutex<Vec<Arc<dyn SensorListener>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn add_listener(&self, listener: Arc<dyn SensorListener>) {
        let mut listeners = self.lock();
        if !listeners.iter().any(|l| Arc::ptr_eq(l, &listener)) {
            listeners.push(listener);
        }
    }

    pub fn remove_listener(&self, listener: &Arc<dyn SensorListener>) {
        self.lock().retain(|l| !Arc::ptr_eq(l, listener));
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn broadcast_number(&self, channel: SensorChannel, value: f32) {
        self.broadcast(channel, &SensorValue::Number(value));
    }

    pub fn broadcast_text(&self, channel: SensorChannel, value: &str) {
        self.broadcast(channel, &SensorValue::Text(value.to_string()));
    }

    fn broadcast(&self, channel: SensorChannel, value: &SensorValue) {
        let snapshot: Vec<Arc<dyn SensorListener>> = self.lock().clone();
        for listener in snapshot {
            listener.on_sensor_changed(channel, value);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Arc<dyn SensorListener>>> {
        self.listeners.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingListener {
        received: Mutex<Vec<(SensorChannel, SensorValue)>>,
    }

    impl RecordingListener {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                received: Mutex::new(Vec::new()),
            })
        }

        fn received(&self) -> Vec<(SensorChannel, SensorValue)> {
            self.received.lock().unwrap().clone()
        }
    }

    impl SensorListener for RecordingListener {
        fn on_sensor_changed(&self, channel: SensorChannel, value: &SensorValue) {
            self.received.lock().unwrap().push((channel, value.clone()));
        }
    }

    #[test]
    fn test_broadcast_reaches_all_listeners() {
        let registry = ListenerRegistry::new();
        let a = RecordingListener::new();
        let b = RecordingListener::new();
        registry.add_listener(a.clone());
        registry.add_listener(b.clone());

        registry.broadcast_number(SensorChannel::FaceDetected, 1.0);

        for listener in [&a, &b] {
            assert_eq!(
                listener.received(),
                vec![(SensorChannel::FaceDetected, SensorValue::Number(1.0))]
            );
        }
    }

    #[test]
    fn test_add_listener_is_idempotent() {
        let registry = ListenerRegistry::new();
        let listener = RecordingListener::new();
        registry.add_listener(listener.clone());
        registry.add_listener(listener.clone());
        assert_eq!(registry.len(), 1);

        registry.broadcast_number(SensorChannel::FaceSize, 50.0);
        assert_eq!(listener.received().len(), 1);
    }

    #[test]
    fn test_remove_listener() {
        let registry = ListenerRegistry::new();
        let listener = RecordingListener::new();
        registry.add_listener(listener.clone());

        let handle: Arc<dyn SensorListener> = listener.clone();
        registry.remove_listener(&handle);
        assert!(registry.is_empty());

        registry.broadcast_number(SensorChannel::FaceSize, 50.0);
        assert!(listener.received().is_empty());
    }

    #[test]
    fn test_remove_unregistered_listener_is_noop() {
        let registry = ListenerRegistry::new();
        registry.add_listener(RecordingListener::new());

        let other: Arc<dyn SensorListener> = RecordingListener::new();
        registry.remove_listener(&other);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_instances_are_distinct_members() {
        let registry = ListenerRegistry::new();
        registry.add_listener(RecordingListener::new());
        registry.add_listener(RecordingListener::new());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_broadcast_text() {
        let registry = ListenerRegistry::new();
        let listener = RecordingListener::new();
        registry.add_listener(listener.clone());

        registry.broadcast_text(SensorChannel::TextFromCamera, "hello");
        assert_eq!(
            listener.received(),
            vec![(
                SensorChannel::TextFromCamera,
                SensorValue::Text("hello".into())
            )]
        );
    }

    #[test]
    fn test_broadcast_with_no_listeners() {
        let registry = ListenerRegistry::new();
        registry.broadcast_number(SensorChannel::NoseX, 0.0);
        // No panics = success
    }
}

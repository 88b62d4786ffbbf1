use super::channel::{SensorChannel, SensorValue};

/// Domain interface for anything that can receive a named sensor value.
///
/// Emission is synchronous: the bridge calls every registered listener
/// in-line during frame processing, so implementations must return quickly.
/// `Sync` because registration and frame processing may happen on
/// different threads.
pub trait SensorListener: Send + Sync {
    fn on_sensor_changed(&self, channel: SensorChannel, value: &SensorValue);
}

/// Listener that discards every value.
///
/// Used by tests where emissions are irrelevant.
pub struct NullSensorListener;

impl SensorListener for NullSensorListener {
    fn on_sensor_changed(&self, _channel: SensorChannel, _value: &SensorValue) {}
}

use crate::sensors::domain::channel::{SensorChannel, SensorValue};
use crate::sensors::domain::listener::SensorListener;

/// Writes every emission through the `log` facade.
///
/// Used by the CLI to trace a replayed session.
pub struct LogListener;

impl SensorListener for LogListener {
    fn on_sensor_changed(&self, channel: SensorChannel, value: &SensorValue) {
        log::info!("{channel} = {value}");
    }
}

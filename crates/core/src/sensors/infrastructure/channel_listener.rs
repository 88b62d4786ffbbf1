use crossbeam_channel::{Receiver, Sender};

use crate::sensors::domain::channel::{SensorChannel, SensorValue};
use crate::sensors::domain::listener::SensorListener;

/// One emission as seen by a cross-thread consumer.
#[derive(Clone, Debug, PartialEq)]
pub struct SensorEvent {
    pub channel: SensorChannel,
    pub value: SensorValue,
}

/// Forwards every emission over a crossbeam channel.
///
/// Lets a consumer on another thread observe the emission stream without
/// blocking the frame-processing call. Events are dropped once the
/// receiving side disconnects.
pub struct ChannelListener {
    sender: Sender<SensorEvent>,
}

impl ChannelListener {
    pub fn new(sender: Sender<SensorEvent>) -> Self {
        Self { sender }
    }

    /// Listener plus the receiving end of an unbounded channel.
    pub fn unbounded() -> (Self, Receiver<SensorEvent>) {
        let (sender, receiver) = crossbeam_channel::unbounded();
        (Self::new(sender), receiver)
    }
}

impl SensorListener for ChannelListener {
    fn on_sensor_changed(&self, channel: SensorChannel, value: &SensorValue) {
        let event = SensorEvent {
            channel,
            value: value.clone(),
        };
        if self.sender.send(event).is_err() {
            log::trace!("sensor event receiver disconnected, dropping {channel}");
        }
    }
}

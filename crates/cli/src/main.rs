use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;

use visionbridge_core::pipeline::detection_session::DetectionSession;
use visionbridge_core::pipeline::infrastructure::json_replay_reader;
use visionbridge_core::sensors::infrastructure::log_listener::LogListener;
use visionbridge_core::sensors::infrastructure::sensor_store::SensorStore;

/// Replay a recorded detection session through the sensor bridge.
#[derive(Parser)]
#[command(name = "visionbridge")]
struct Cli {
    /// Recorded detection session (JSON array of frames).
    input: PathBuf,

    /// Log every emitted sensor value as frames are replayed.
    #[arg(long)]
    trace: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let frames = json_replay_reader::read_frames(&cli.input)?;

    let mut session = DetectionSession::new();
    let store = Arc::new(SensorStore::new());
    session.add_listener(store.clone());
    if cli.trace {
        session.add_listener(Arc::new(LogListener));
    }

    for frame in &frames {
        session.process_frame(frame);
    }
    log::info!("Replayed {} frames from {}", frames.len(), cli.input.display());

    print_snapshot(&store);
    Ok(())
}

/// Final sensor values, one `NAME = value` line per channel.
fn print_snapshot(store: &SensorStore) {
    for (channel, value) in store.snapshot() {
        println!("{channel} = {value}");
    }
}

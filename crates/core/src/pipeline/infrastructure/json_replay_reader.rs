use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::pipeline::detection_frame::DetectionFrame;

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("failed to read replay file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse replay file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads a recorded detection session: a JSON array of frames, in the
/// order the camera pipeline produced them.
pub fn read_frames(path: &Path) -> Result<Vec<DetectionFrame>, ReplayError> {
    let contents = fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ReplayError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

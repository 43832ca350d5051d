use std::path::PathBuf;

use divana_core::Direction;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio backend '{0}' is not known on this platform")]
    UnknownHost(String),

    #[error("audio backend '{0}' could not be initialised: {1}")]
    HostUnavailable(String, #[source] cpal::HostUnavailable),

    #[error("unable to enumerate {0} devices: {1}")]
    Devices(Direction, #[source] cpal::DevicesError),

    #[error("unable to read the name of a {0} device: {1}")]
    DeviceName(Direction, #[source] cpal::DeviceNameError),

    #[error("unable to retrieve supported configs for '{0}': {1}")]
    SupportedConfigs(String, #[source] cpal::SupportedStreamConfigsError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to write configuration to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error(transparent)]
    Audio(#[from] AudioError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no suitable {0} device found")]
    NoSuitableDevice(Direction),

    #[error("device selection used before it was initialised")]
    NotInitialized,
}

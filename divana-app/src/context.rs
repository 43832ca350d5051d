//! Process-wide audio context backed by cpal.

use cpal::{
    traits::{DeviceTrait, HostTrait},
    SupportedStreamConfigRange,
};
use divana_core::{DeviceCaps, Direction, SampleFormat};
use log::{debug, info, warn};

use crate::{
    error::AudioError,
    host::{AudioHost, HostDevice},
};

/// Owned handle to the host audio subsystem.
///
/// Create one at startup and hand it to a `DeviceCatalog`. Dropping it releases the backend.
pub struct AudioContext {
    host: cpal::Host,
}

impl AudioContext {
    /// Open the named backend (matched case-insensitively against cpal host names,
    /// e.g. "ALSA", "JACK", "WASAPI", "CoreAudio"), or the platform default when `None`.
    pub fn open(preferred: Option<&str>) -> Result<Self, AudioError> {
        let host = match preferred {
            None => cpal::default_host(),
            Some(name) => {
                let Some(id) = cpal::available_hosts()
                    .into_iter()
                    .find(|id| id.name().eq_ignore_ascii_case(name))
                else {
                    return Err(AudioError::UnknownHost(name.to_owned()));
                };
                cpal::host_from_id(id).map_err(|e| AudioError::HostUnavailable(name.to_owned(), e))?
            }
        };
        info!("audio context opened on {} backend", host.id().name());
        Ok(Self { host })
    }

    /// Names of the backends compiled in and available on this machine.
    pub fn available_backends() -> Vec<&'static str> {
        cpal::available_hosts()
            .into_iter()
            .map(|id| id.name())
            .collect()
    }

    pub fn backend_name(&self) -> &'static str {
        self.host.id().name()
    }

    fn default_device_name(&self, direction: Direction) -> Option<String> {
        let device = match direction {
            Direction::Capture => self.host.default_input_device(),
            Direction::Playback => self.host.default_output_device(),
        };
        device.and_then(|d| d.name().ok())
    }
}

impl Drop for AudioContext {
    fn drop(&mut self) {
        debug!("audio context on {} backend released", self.backend_name());
    }
}

impl AudioHost for AudioContext {
    type Device = cpal::Device;

    fn devices(&self, direction: Direction) -> Result<Vec<HostDevice<cpal::Device>>, AudioError> {
        let devices: Vec<cpal::Device> = match direction {
            Direction::Capture => self
                .host
                .input_devices()
                .map_err(|e| AudioError::Devices(direction, e))?
                .collect(),
            Direction::Playback => self
                .host
                .output_devices()
                .map_err(|e| AudioError::Devices(direction, e))?
                .collect(),
        };
        let backend = self.backend_name();
        let mut out = vec![];
        for d in devices {
            let name = match d.name() {
                Ok(name) => name,
                Err(e) => {
                    warn!("{}", AudioError::DeviceName(direction, e));
                    continue;
                }
            };
            out.push(HostDevice {
                raw_id: format!("{backend}/{name}").into_bytes(),
                name,
                handle: d,
            });
        }
        Ok(out)
    }

    fn device_caps(
        &self,
        direction: Direction,
        device: &HostDevice<cpal::Device>,
    ) -> Result<DeviceCaps, AudioError> {
        let configs: Vec<SupportedStreamConfigRange> = match direction {
            Direction::Capture => device
                .handle
                .supported_input_configs()
                .map_err(|e| AudioError::SupportedConfigs(device.name.clone(), e))?
                .collect(),
            Direction::Playback => device
                .handle
                .supported_output_configs()
                .map_err(|e| AudioError::SupportedConfigs(device.name.clone(), e))?
                .collect(),
        };
        let is_default =
            self.default_device_name(direction).as_deref() == Some(device.name.as_str());
        Ok(caps_from_configs(&configs, is_default))
    }
}

fn caps_from_configs(configs: &[SupportedStreamConfigRange], is_default: bool) -> DeviceCaps {
    let mut formats: Vec<SampleFormat> = vec![];
    for c in configs {
        let f = sample_format(c.sample_format());
        if !formats.contains(&f) {
            formats.push(f);
        }
    }
    DeviceCaps {
        is_default,
        formats,
        min_channels: configs.iter().map(|c| c.channels() as u32).min().unwrap_or(0),
        max_channels: configs.iter().map(|c| c.channels() as u32).max().unwrap_or(0),
        min_sample_rate: configs
            .iter()
            .map(|c| c.min_sample_rate().0)
            .min()
            .unwrap_or(0),
        max_sample_rate: configs
            .iter()
            .map(|c| c.max_sample_rate().0)
            .max()
            .unwrap_or(0),
    }
}

fn sample_format(format: cpal::SampleFormat) -> SampleFormat {
    match format {
        cpal::SampleFormat::U8 => SampleFormat::U8,
        cpal::SampleFormat::I16 => SampleFormat::S16,
        cpal::SampleFormat::I32 => SampleFormat::S32,
        cpal::SampleFormat::F32 => SampleFormat::F32,
        _ => SampleFormat::Unknown,
    }
}

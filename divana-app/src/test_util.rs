use std::cell::{Cell, RefCell};

use divana_core::{DeviceCaps, Direction, SampleFormat};

use crate::{
    error::AudioError,
    host::{AudioHost, HostDevice},
};

/// A device as the in-memory host will report it. `caps: None` makes its info query fail.
#[derive(Clone)]
pub(crate) struct FakeDevice {
    pub raw_id: Vec<u8>,
    pub name: String,
    pub caps: Option<DeviceCaps>,
}

impl FakeDevice {
    pub fn new(id: &str, is_default: bool, min_channels: u32, max_channels: u32) -> Self {
        Self {
            raw_id: id.as_bytes().to_vec(),
            name: format!("Device {id}"),
            caps: Some(DeviceCaps {
                is_default,
                formats: vec![SampleFormat::S16],
                min_channels,
                max_channels,
                min_sample_rate: 48000,
                max_sample_rate: 48000,
            }),
        }
    }

    pub fn broken(id: &str) -> Self {
        Self {
            raw_id: id.as_bytes().to_vec(),
            name: format!("Device {id}"),
            caps: None,
        }
    }
}

#[derive(Default)]
pub(crate) struct FakeHost {
    capture: RefCell<Vec<FakeDevice>>,
    playback: RefCell<Vec<FakeDevice>>,
    unavailable: Cell<bool>,
}

impl FakeHost {
    pub fn new(capture: Vec<FakeDevice>, playback: Vec<FakeDevice>) -> Self {
        Self {
            capture: RefCell::new(capture),
            playback: RefCell::new(playback),
            unavailable: Cell::new(false),
        }
    }

    pub fn set_devices(&self, direction: Direction, devices: Vec<FakeDevice>) {
        match direction {
            Direction::Capture => *self.capture.borrow_mut() = devices,
            Direction::Playback => *self.playback.borrow_mut() = devices,
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }
}

impl AudioHost for FakeHost {
    type Device = Option<DeviceCaps>;

    fn devices(&self, direction: Direction) -> Result<Vec<HostDevice<Self::Device>>, AudioError> {
        if self.unavailable.get() {
            return Err(AudioError::Devices(
                direction,
                cpal::DevicesError::BackendSpecific {
                    err: cpal::BackendSpecificError {
                        description: "backend gone".to_owned(),
                    },
                },
            ));
        }
        let list = match direction {
            Direction::Capture => self.capture.borrow(),
            Direction::Playback => self.playback.borrow(),
        };
        Ok(list
            .iter()
            .map(|d| HostDevice {
                raw_id: d.raw_id.clone(),
                name: d.name.clone(),
                handle: d.caps.clone(),
            })
            .collect())
    }

    fn device_caps(
        &self,
        _direction: Direction,
        device: &HostDevice<Self::Device>,
    ) -> Result<DeviceCaps, AudioError> {
        device.handle.clone().ok_or_else(|| {
            AudioError::SupportedConfigs(
                device.name.clone(),
                cpal::SupportedStreamConfigsError::DeviceNotAvailable,
            )
        })
    }
}

use divana_core::{DeviceId, DeviceRecord, Direction};
use log::{info, warn};

use crate::{error::AudioError, host::AudioHost};

/// Turns whatever the host reports into uniform `DeviceRecord`s.
pub struct DeviceCatalog<H: AudioHost> {
    host: H,
}

impl<H: AudioHost> DeviceCatalog<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn enumerate_capture(&self) -> Result<Vec<DeviceRecord>, AudioError> {
        self.enumerate(Direction::Capture)
    }

    pub fn enumerate_playback(&self) -> Result<Vec<DeviceRecord>, AudioError> {
        self.enumerate(Direction::Playback)
    }

    /// List every device of `direction` whose extended info could be read.
    ///
    /// A device whose info query fails is left out with a warning. Only a failure to list
    /// devices at all is returned as an error.
    pub fn enumerate(&self, direction: Direction) -> Result<Vec<DeviceRecord>, AudioError> {
        let listed = self.host.devices(direction)?;
        let mut out = Vec::with_capacity(listed.len());
        for device in &listed {
            let caps = match self.host.device_caps(direction, device) {
                Ok(caps) => caps,
                Err(e) => {
                    warn!("error getting {direction} device info: {e}");
                    continue;
                }
            };
            out.push(DeviceRecord::new(
                DeviceId::from_raw(&device.raw_id),
                device.name.clone(),
                direction,
                caps,
            ));
        }
        info!("{direction} devices:");
        for d in &out {
            info!("  {d}");
        }
        Ok(out)
    }
}

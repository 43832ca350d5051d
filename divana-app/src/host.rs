use divana_core::{DeviceCaps, Direction};

use crate::error::AudioError;

/// A device as first listed by the host, before its extended info has been queried.
pub struct HostDevice<D> {
    /// Vendor identifier bytes, possibly zero padded.
    pub raw_id: Vec<u8>,
    pub name: String,
    pub handle: D,
}

/// The parts of a host audio subsystem that the device catalogue relies on.
pub trait AudioHost {
    /// Backend-specific handle needed to query a listed device again.
    type Device;

    /// List all devices of one direction. Failure here means the backend itself is unusable.
    fn devices(&self, direction: Direction) -> Result<Vec<HostDevice<Self::Device>>, AudioError>;

    /// Query channel and sample rate bounds, formats and the default flag for one device.
    fn device_caps(
        &self,
        direction: Direction,
        device: &HostDevice<Self::Device>,
    ) -> Result<DeviceCaps, AudioError>;
}

pub mod device;
pub mod format;
pub mod id;
pub mod reconcile;

pub use device::{DeviceCaps, DeviceRecord, Direction};
pub use format::SampleFormat;
pub use id::DeviceId;

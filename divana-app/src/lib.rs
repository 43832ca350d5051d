//! Audio device selection for Divana: enumerate what the host offers, reconcile it with
//! the remembered choice and persist the result.

pub mod catalog;
pub mod config;
pub mod context;
pub mod disk;
pub mod error;
pub mod host;
pub mod selection;

#[cfg(test)]
mod test_util;

pub use divana_core::{DeviceCaps, DeviceId, DeviceRecord, Direction, SampleFormat};

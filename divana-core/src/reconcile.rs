//! Mapping a remembered choice onto a freshly enumerated device list.

use log::debug;

use crate::{DeviceId, DeviceRecord};

/// How a selection was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matched {
    /// The requested identifier or display string was found.
    Exact,
    /// Fell back to the device the host reports as default.
    SystemDefault,
    /// No device was flagged default so the first listed device was taken.
    FirstListed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub index: usize,
    pub matched: Matched,
}

/// Find the device with the given identifier, otherwise fall back to the device flagged as
/// system default.
///
/// If no device carries the default flag (cpal identifies the default by name and may
/// report none) the first listed device is chosen, reported as `Matched::FirstListed`.
/// Returns `None` only when `devices` is empty.
pub fn resolve_by_id(devices: &[DeviceRecord], id: &DeviceId) -> Option<Resolved> {
    if let Some(index) = devices.iter().position(|d| d.id() == id) {
        return Some(Resolved {
            index,
            matched: Matched::Exact,
        });
    }
    debug!("device '{id}' not present, falling back");
    fallback(devices)
}

/// Find the device whose display line equals `display`, otherwise fall back.
///
/// Returns `None` only when `devices` is empty.
pub fn resolve_by_display(devices: &[DeviceRecord], display: &str) -> Option<Resolved> {
    if let Some(index) = devices.iter().position(|d| d.display() == display) {
        return Some(Resolved {
            index,
            matched: Matched::Exact,
        });
    }
    debug!("no device displayed as '{display}', falling back");
    fallback(devices)
}

fn fallback(devices: &[DeviceRecord]) -> Option<Resolved> {
    if let Some(index) = devices.iter().position(|d| d.is_default()) {
        return Some(Resolved {
            index,
            matched: Matched::SystemDefault,
        });
    }
    if devices.is_empty() {
        return None;
    }
    Some(Resolved {
        index: 0,
        matched: Matched::FirstListed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeviceCaps, Direction};

    fn dev(id: &str, is_default: bool, min_channels: u32, max_channels: u32) -> DeviceRecord {
        DeviceRecord::new(
            DeviceId::from_stored(id),
            format!("Device {id}"),
            Direction::Playback,
            DeviceCaps {
                is_default,
                formats: vec![],
                min_channels,
                max_channels,
                min_sample_rate: 48000,
                max_sample_rate: 48000,
            },
        )
    }

    #[test]
    fn stored_id_wins() {
        let devices = [dev("A", false, 2, 2), dev("B", true, 1, 8)];
        let r = resolve_by_id(&devices, &DeviceId::from_stored("B")).unwrap();
        assert_eq!(r.index, 1);
        assert_eq!(r.matched, Matched::Exact);
    }

    #[test]
    fn stored_id_wins_over_default() {
        let devices = [dev("A", false, 2, 2), dev("B", true, 1, 8)];
        let r = resolve_by_id(&devices, &DeviceId::from_stored("A")).unwrap();
        assert_eq!(r.index, 0);
        assert_eq!(r.matched, Matched::Exact);
    }

    #[test]
    fn unknown_id_falls_back_to_default() {
        let devices = [dev("A", true, 2, 2)];
        let r = resolve_by_id(&devices, &DeviceId::from_stored("Z")).unwrap();
        assert_eq!(r.index, 0);
        assert_eq!(r.matched, Matched::SystemDefault);

        let devices = [dev("A", false, 2, 2), dev("B", false, 2, 2), dev("C", true, 2, 2)];
        let r = resolve_by_id(&devices, &DeviceId::default()).unwrap();
        assert_eq!(r.index, 2);
    }

    #[test]
    fn padded_stored_id_matches() {
        let devices = [dev("A", false, 2, 2), dev("B", true, 1, 8)];
        let r = resolve_by_id(&devices, &DeviceId::from_raw(b"A\0\0\0")).unwrap();
        assert_eq!(r.index, 0);
    }

    #[test]
    fn no_default_takes_first() {
        let devices = [dev("A", false, 2, 2), dev("B", false, 2, 2)];
        let r = resolve_by_id(&devices, &DeviceId::from_stored("Z")).unwrap();
        assert_eq!(r.index, 0);
        assert_eq!(r.matched, Matched::FirstListed);
    }

    #[test]
    fn empty_catalog_is_unresolved() {
        assert_eq!(resolve_by_id(&[], &DeviceId::from_stored("A")), None);
        assert_eq!(resolve_by_display(&[], "anything"), None);
    }

    #[test]
    fn display_lookup() {
        let devices = [dev("A", false, 2, 2), dev("B", true, 1, 8)];
        let wanted = devices[0].display();
        let r = resolve_by_display(&devices, &wanted).unwrap();
        assert_eq!(r.index, 0);
        assert_eq!(r.matched, Matched::Exact);

        let r = resolve_by_display(&devices, "[Q] nothing like this").unwrap();
        assert_eq!(r.index, 1);
        assert_eq!(r.matched, Matched::SystemDefault);
    }
}

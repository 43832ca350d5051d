use std::fmt::Display;

use crate::{format::join_tags, DeviceId, SampleFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Microphone-like input.
    Capture,
    /// Speaker-like output.
    Playback,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Capture => write!(f, "capture"),
            Direction::Playback => write!(f, "playback"),
        }
    }
}

/// Extended per-device information reported by the host audio subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceCaps {
    pub is_default: bool,
    pub formats: Vec<SampleFormat>,
    pub min_channels: u32,
    pub max_channels: u32,
    pub min_sample_rate: u32,
    pub max_sample_rate: u32,
}

/// One enumerated device. Records are never modified; a re-enumeration replaces them all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    id: DeviceId,
    name: String,
    direction: Direction,
    caps: DeviceCaps,
}

impl DeviceRecord {
    pub fn new<S: Into<String>>(
        id: DeviceId,
        name: S,
        direction: Direction,
        caps: DeviceCaps,
    ) -> Self {
        // Names reported through fixed-width buffers end at the first NUL
        let mut name: String = name.into();
        if let Some(end) = name.find('\0') {
            name.truncate(end);
        }
        Self {
            id,
            name,
            direction,
            caps,
        }
    }

    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_default(&self) -> bool {
        self.caps.is_default
    }

    /// Channel range such as `2ch` or `1ch-8ch`.
    pub fn channel_summary(&self) -> String {
        collapse_range(self.caps.min_channels, self.caps.max_channels, "ch")
    }

    /// Sample rate range such as `48000hz` or `8000hz-192000hz`.
    pub fn sample_rate_summary(&self) -> String {
        collapse_range(self.caps.min_sample_rate, self.caps.max_sample_rate, "hz")
    }

    /// Supported formats as slash-joined tags, e.g. `S16/F32`.
    pub fn format_summary(&self) -> String {
        join_tags(&self.caps.formats)
    }

    /// Single-line human readable summary. This string is also what the dialog
    /// offers as a choice, so it doubles as the lookup key for `reconcile::resolve_by_display`.
    pub fn display(&self) -> String {
        let default_marker = if self.caps.is_default { "[default] " } else { "" };
        format!(
            "[{}] {} {}[{}] [{}] [{}]",
            self.id,
            self.name,
            default_marker,
            self.channel_summary(),
            self.sample_rate_summary(),
            self.format_summary()
        )
    }
}

impl Display for DeviceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

fn collapse_range(min: u32, max: u32, unit: &str) -> String {
    if min == max {
        format!("{min}{unit}")
    } else {
        format!("{min}{unit}-{max}{unit}")
    }
}

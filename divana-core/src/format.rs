use std::fmt::Display;

/// Sample formats a device may advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    U8,
    S16,
    S32,
    F32,
    /// Any format the host reports that has no tag of its own.
    Unknown,
}

impl SampleFormat {
    pub fn tag(&self) -> &'static str {
        match self {
            SampleFormat::U8 => "U8",
            SampleFormat::S16 => "S16",
            SampleFormat::S32 => "S32",
            SampleFormat::F32 => "F32",
            SampleFormat::Unknown => "<unknown>",
        }
    }
}

impl Display for SampleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Slash-joined list of format tags, e.g. `S16/F32`.
pub fn join_tags(formats: &[SampleFormat]) -> String {
    formats
        .iter()
        .map(SampleFormat::tag)
        .collect::<Vec<_>>()
        .join("/")
}

//! Persisted selection: a handful of string fields in the unnamed section of an INI file.

use std::{
    collections::BTreeMap,
    ffi::OsString,
    path::PathBuf,
};

use ini::{EscapePolicy, Ini, ParseOption};
use log::debug;

use crate::error::ConfigError;

/// File name used when no other location is given, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "divana-config.ini";

pub const INPUT_DEVICE_ID: &str = "InputDeviceId";
pub const OUTPUT_DEVICE_ID: &str = "OutputDeviceId";
pub const MAIN_DISK_PATH: &str = "MainDiskPath";
pub const DRIVER_DISK_PATH: &str = "DriverDiskPath";

/// Which set of fields a configuration file carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLayout {
    Devices,
    DiskPaths,
}

impl ConfigLayout {
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            ConfigLayout::Devices => &[INPUT_DEVICE_ID, OUTPUT_DEVICE_ID],
            ConfigLayout::DiskPaths => &[MAIN_DISK_PATH, DRIVER_DISK_PATH],
        }
    }

    fn recognise(&self, field: &str) -> Option<&'static str> {
        self.fields().iter().copied().find(|f| *f == field)
    }
}

/// Every recognised field of a layout mapped to its value. Fields are never absent:
/// anything not read from disk or not yet set is the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    layout: ConfigLayout,
    values: BTreeMap<&'static str, String>,
}

impl ConfigDocument {
    pub fn empty(layout: ConfigLayout) -> Self {
        Self {
            layout,
            values: layout
                .fields()
                .iter()
                .map(|f| (*f, String::new()))
                .collect(),
        }
    }

    /// Value of `field`, or the empty string if the layout does not recognise it.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Set a recognised field. Returns false and changes nothing for unknown fields.
    pub fn set<S: Into<String>>(&mut self, field: &str, value: S) -> bool {
        let Some(key) = self.layout.recognise(field) else {
            return false;
        };
        self.values.insert(key, value.into());
        true
    }
}

pub struct ConfigStore {
    path: PathBuf,
    layout: ConfigLayout,
}

impl ConfigStore {
    pub fn new<P: Into<PathBuf>>(path: P, layout: ConfigLayout) -> Self {
        Self {
            path: path.into(),
            layout,
        }
    }

    /// Read the document. A missing or unreadable file yields empty values for every field.
    ///
    /// Values are taken verbatim: backslashes and quotes are not interpreted, so Windows
    /// paths written by hand or by older tools read back unchanged.
    pub fn load(&self) -> ConfigDocument {
        let mut doc = ConfigDocument::empty(self.layout);
        let ini = match Ini::load_from_file_opt(&self.path, verbatim()) {
            Ok(ini) => ini,
            Err(e) => {
                debug!(
                    "configuration '{}' not loaded, using defaults: {e}",
                    self.path.display()
                );
                return doc;
            }
        };
        let Some(section) = ini.section(None::<String>) else {
            return doc;
        };
        for field in self.layout.fields() {
            if let Some(value) = section.get(field) {
                doc.set(field, value);
            }
        }
        doc
    }

    /// Write every recognised field, replacing whatever the file held before.
    ///
    /// The new contents go to a sibling file first and are then renamed over the old one.
    pub fn save(&self, doc: &ConfigDocument) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        for field in self.layout.fields() {
            ini.with_section(None::<String>).set(*field, doc.get(field));
        }
        let mut staging = OsString::from(self.path.as_os_str());
        staging.push(".tmp");
        let staging = PathBuf::from(staging);
        ini.write_to_file_policy(&staging, EscapePolicy::Nothing)
            .map_err(|source| ConfigError::Write {
                path: staging.clone(),
                source,
            })?;
        if let Err(source) = std::fs::rename(&staging, &self.path) {
            let _ = std::fs::remove_file(&staging);
            return Err(ConfigError::Write {
                path: self.path.clone(),
                source,
            });
        }
        debug!("configuration saved to '{}'", self.path.display());
        Ok(())
    }
}

fn verbatim() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..Default::default()
    }
}

//! The disk path form: the same persistence contract as device selection, but the two
//! fields are directories typed or browsed by the user.

use std::path::PathBuf;

use log::info;

use crate::{
    config::{ConfigDocument, ConfigLayout, ConfigStore, DRIVER_DISK_PATH, MAIN_DISK_PATH},
    error::ConfigError,
    selection::DialogOutcome,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathField {
    MainDisk,
    DriverDisk,
}

impl PathField {
    pub fn key(&self) -> &'static str {
        match self {
            PathField::MainDisk => MAIN_DISK_PATH,
            PathField::DriverDisk => DRIVER_DISK_PATH,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PathField::MainDisk => "Main disk path",
            PathField::DriverDisk => "Driver disk path",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathEvent {
    PathChanged { field: PathField, path: String },
    Apply,
    Cancel,
}

pub struct DiskPathForm {
    store: ConfigStore,
    document: ConfigDocument,
}

impl DiskPathForm {
    /// Create the form and load its current values.
    pub fn new<P: Into<PathBuf>>(config_path: P) -> Self {
        let store = ConfigStore::new(config_path, ConfigLayout::DiskPaths);
        let document = store.load();
        Self { store, document }
    }

    pub fn initialize(&mut self) {
        self.document = self.store.load();
    }

    pub fn path(&self, field: PathField) -> &str {
        self.document.get(field.key())
    }

    pub fn handle(&mut self, event: PathEvent) -> Result<DialogOutcome, ConfigError> {
        match event {
            PathEvent::PathChanged { field, path } => {
                self.document.set(field.key(), path);
                Ok(DialogOutcome::Continue)
            }
            PathEvent::Apply => {
                self.store.save(&self.document)?;
                info!(
                    "saved paths: main '{}', driver '{}'",
                    self.path(PathField::MainDisk),
                    self.path(PathField::DriverDisk)
                );
                Ok(DialogOutcome::Close)
            }
            PathEvent::Cancel => {
                self.initialize();
                Ok(DialogOutcome::Close)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONFIG_PATH;

    #[test]
    fn starts_with_stored_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_PATH);
        std::fs::write(&path, "MainDiskPath=/srv/main\n").unwrap();
        let form = DiskPathForm::new(&path);
        assert_eq!(form.path(PathField::MainDisk), "/srv/main");
        assert_eq!(form.path(PathField::DriverDisk), "");
    }

    #[test]
    fn apply_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_PATH);
        let mut form = DiskPathForm::new(&path);
        let outcome = form
            .handle(PathEvent::PathChanged {
                field: PathField::DriverDisk,
                path: "D:\\drivers".to_owned(),
            })
            .unwrap();
        assert_eq!(outcome, DialogOutcome::Continue);
        assert_eq!(form.handle(PathEvent::Apply).unwrap(), DialogOutcome::Close);

        let reopened = DiskPathForm::new(&path);
        assert_eq!(reopened.path(PathField::DriverDisk), "D:\\drivers");
        assert_eq!(reopened.path(PathField::MainDisk), "");
    }

    #[test]
    fn cancel_reverts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_PATH);
        std::fs::write(&path, "MainDiskPath=/srv/main\nDriverDiskPath=/srv/drv\n").unwrap();
        let mut form = DiskPathForm::new(&path);
        form.handle(PathEvent::PathChanged {
            field: PathField::MainDisk,
            path: "/elsewhere".to_owned(),
        })
        .unwrap();
        assert_eq!(form.path(PathField::MainDisk), "/elsewhere");
        assert_eq!(form.handle(PathEvent::Cancel).unwrap(), DialogOutcome::Close);
        assert_eq!(form.path(PathField::MainDisk), "/srv/main");
    }
}

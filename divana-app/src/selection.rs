//! Reconciling the remembered device choice with what the host currently offers.

use std::path::PathBuf;

use divana_core::{
    reconcile::{resolve_by_display, resolve_by_id, Matched, Resolved},
    DeviceId, DeviceRecord, Direction,
};
use log::info;

use crate::{
    catalog::DeviceCatalog,
    config::{ConfigDocument, ConfigLayout, ConfigStore, INPUT_DEVICE_ID, OUTPUT_DEVICE_ID},
    error::SelectionError,
    host::AudioHost,
};

/// Something the user did in the device dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A new entry was picked; `display` is the chosen option's text.
    SelectionChanged { direction: Direction, display: String },
    Apply,
    Cancel,
}

/// Whether the dialog stays open after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Continue,
    Close,
}

enum State {
    Uninitialized,
    Reconciled(Reconciled),
}

struct Reconciled {
    document: ConfigDocument,
    capture: Vec<DeviceRecord>,
    playback: Vec<DeviceRecord>,
    input: usize,
    output: usize,
}

impl Reconciled {
    fn devices(&self, direction: Direction) -> &[DeviceRecord] {
        match direction {
            Direction::Capture => &self.capture,
            Direction::Playback => &self.playback,
        }
    }

    fn index_mut(&mut self, direction: Direction) -> &mut usize {
        match direction {
            Direction::Capture => &mut self.input,
            Direction::Playback => &mut self.output,
        }
    }
}

/// Owns the input/output device choice for the lifetime of the dialog.
pub struct SelectionController<H: AudioHost> {
    store: ConfigStore,
    catalog: DeviceCatalog<H>,
    state: State,
}

impl<H: AudioHost> SelectionController<H> {
    pub fn new<P: Into<PathBuf>>(config_path: P, catalog: DeviceCatalog<H>) -> Self {
        Self {
            store: ConfigStore::new(config_path, ConfigLayout::Devices),
            catalog,
            state: State::Uninitialized,
        }
    }

    pub fn catalog(&self) -> &DeviceCatalog<H> {
        &self.catalog
    }

    /// Load the configuration, enumerate both directions and pick a device for each.
    ///
    /// May be called again at any time; the catalogue and selection are replaced wholesale.
    pub fn initialize(&mut self) -> Result<(), SelectionError> {
        let document = self.store.load();
        let capture = self.catalog.enumerate_capture()?;
        let playback = self.catalog.enumerate_playback()?;
        let input =
            resolve_stored(&capture, Direction::Capture, document.get(INPUT_DEVICE_ID))?;
        let output = resolve_stored(
            &playback,
            Direction::Playback,
            document.get(OUTPUT_DEVICE_ID),
        )?;
        self.state = State::Reconciled(Reconciled {
            document,
            capture,
            playback,
            input,
            output,
        });
        Ok(())
    }

    /// Point the selection for `direction` at the device displayed as `display`,
    /// or at the default device if nothing is displayed that way.
    pub fn select_by_display_name(
        &mut self,
        direction: Direction,
        display: &str,
    ) -> Result<(), SelectionError> {
        let State::Reconciled(r) = &mut self.state else {
            return Err(SelectionError::NotInitialized);
        };
        let Resolved { index, .. } = resolve_by_display(r.devices(direction), display)
            .ok_or(SelectionError::NoSuitableDevice(direction))?;
        *r.index_mut(direction) = index;
        Ok(())
    }

    /// Persist the current selection for both directions.
    pub fn commit(&mut self) -> Result<(), SelectionError> {
        let State::Reconciled(r) = &mut self.state else {
            return Err(SelectionError::NotInitialized);
        };
        let input = r.capture[r.input].id().to_string();
        let output = r.playback[r.output].id().to_string();
        r.document.set(INPUT_DEVICE_ID, input);
        r.document.set(OUTPUT_DEVICE_ID, output);
        self.store.save(&r.document)?;
        info!(
            "saved selection: input '{}', output '{}'",
            r.document.get(INPUT_DEVICE_ID),
            r.document.get(OUTPUT_DEVICE_ID)
        );
        Ok(())
    }

    /// Throw away unsaved changes by reconciling afresh from disk.
    pub fn discard(&mut self) -> Result<(), SelectionError> {
        self.initialize()
    }

    pub fn handle(&mut self, event: SelectionEvent) -> Result<DialogOutcome, SelectionError> {
        match event {
            SelectionEvent::SelectionChanged { direction, display } => {
                self.select_by_display_name(direction, &display)?;
                Ok(DialogOutcome::Continue)
            }
            SelectionEvent::Apply => {
                self.commit()?;
                Ok(DialogOutcome::Close)
            }
            SelectionEvent::Cancel => {
                self.discard()?;
                Ok(DialogOutcome::Close)
            }
        }
    }

    /// Enumerated devices for `direction`; empty before initialisation.
    pub fn devices(&self, direction: Direction) -> &[DeviceRecord] {
        match &self.state {
            State::Uninitialized => &[],
            State::Reconciled(r) => r.devices(direction),
        }
    }

    pub fn selected(&self, direction: Direction) -> Option<&DeviceRecord> {
        let State::Reconciled(r) = &self.state else {
            return None;
        };
        let index = match direction {
            Direction::Capture => r.input,
            Direction::Playback => r.output,
        };
        r.devices(direction).get(index)
    }

    /// Display strings for every device of `direction`, in catalogue order.
    pub fn options(&self, direction: Direction) -> Vec<String> {
        self.devices(direction)
            .iter()
            .map(DeviceRecord::display)
            .collect()
    }
}

fn resolve_stored(
    devices: &[DeviceRecord],
    direction: Direction,
    stored: &str,
) -> Result<usize, SelectionError> {
    let resolved = resolve_by_id(devices, &DeviceId::from_stored(stored))
        .ok_or(SelectionError::NoSuitableDevice(direction))?;
    match resolved.matched {
        Matched::Exact => info!("{direction}: using saved device '{stored}'"),
        Matched::SystemDefault => info!("{direction}: using system default device"),
        Matched::FirstListed => info!("{direction}: no default reported, using first device"),
    }
    Ok(resolved.index)
}

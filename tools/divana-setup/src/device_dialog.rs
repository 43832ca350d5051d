use std::sync::mpsc::{Sender, channel};

use divana_app::{
    DeviceRecord, Direction,
    context::AudioContext,
    selection::{DialogOutcome, SelectionController, SelectionEvent},
};
use iced::{
    Alignment, Element, Length, Size, Task,
    widget::{button, column, horizontal_space, pick_list, row, text},
};
use log::error;

use crate::FatalError;

struct DeviceDialog {
    controller: SelectionController<AudioContext>,
    faults: Sender<FatalError>,
}

/// Show the device form until the user applies or cancels.
pub fn run(controller: SelectionController<AudioContext>) -> Result<(), FatalError> {
    let (faults, fault_rx) = channel();
    let dialog = DeviceDialog { controller, faults };
    iced::application("Device configuration", DeviceDialog::update, DeviceDialog::view)
        .window_size(Size::new(1024.0, 768.0))
        .resizable(false)
        .run_with(move || (dialog, Task::none()))?;
    match fault_rx.try_recv() {
        Ok(e) => Err(e),
        Err(_) => Ok(()),
    }
}

impl DeviceDialog {
    fn update(&mut self, event: SelectionEvent) -> Task<SelectionEvent> {
        match self.controller.handle(event) {
            Ok(DialogOutcome::Continue) => Task::none(),
            Ok(DialogOutcome::Close) => iced::exit(),
            Err(e) => {
                error!("device dialog stopped: {e}");
                let _ = self.faults.send(e.into());
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, SelectionEvent> {
        column![
            self.device_row("Input device", Direction::Capture),
            self.device_row("Output device", Direction::Playback),
            row![
                horizontal_space(),
                button("cancel").on_press(SelectionEvent::Cancel),
                button("apply").on_press(SelectionEvent::Apply),
            ]
            .spacing(10),
        ]
        .spacing(15)
        .padding(15)
        .into()
    }

    fn device_row<'a>(
        &'a self,
        label: &'a str,
        direction: Direction,
    ) -> Element<'a, SelectionEvent> {
        let selected = self
            .controller
            .selected(direction)
            .map(DeviceRecord::display);
        let picker = pick_list(
            self.controller.options(direction),
            selected,
            move |display| SelectionEvent::SelectionChanged { direction, display },
        )
        .width(Length::Fill);
        row![text(label).width(Length::Fixed(140.0)), picker]
            .spacing(10)
            .align_y(Alignment::Center)
            .into()
    }
}

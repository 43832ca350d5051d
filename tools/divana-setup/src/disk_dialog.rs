use std::{
    path::{Path, PathBuf},
    sync::mpsc::{Sender, channel},
};

use divana_app::{
    disk::{DiskPathForm, PathEvent, PathField},
    selection::DialogOutcome,
};
use iced::{
    Alignment, Element, Length, Size, Task,
    widget::{button, column, horizontal_space, row, text, text_input},
};
use log::{error, info};

use crate::FatalError;

#[derive(Debug, Clone)]
enum Message {
    Form(PathEvent),
    Browse(PathField),
}

struct DiskDialog {
    form: DiskPathForm,
    faults: Sender<FatalError>,
}

/// Show the disk path form until the user applies or cancels.
pub fn run(config_path: PathBuf) -> Result<(), FatalError> {
    let (faults, fault_rx) = channel();
    let dialog = DiskDialog {
        form: DiskPathForm::new(config_path),
        faults,
    };
    iced::application("Disk configuration", DiskDialog::update, DiskDialog::view)
        .window_size(Size::new(800.0, 160.0))
        .resizable(false)
        .run_with(move || (dialog, Task::none()))?;
    match fault_rx.try_recv() {
        Ok(e) => Err(e),
        Err(_) => Ok(()),
    }
}

impl DiskDialog {
    fn update(&mut self, message: Message) -> Task<Message> {
        let event = match message {
            Message::Form(event) => event,
            Message::Browse(field) => {
                let mut picker = rfd::FileDialog::new()
                    .set_title(format!("Select directory for {}", field.label()));
                let current = self.form.path(field);
                if !current.is_empty() && Path::new(current).is_dir() {
                    picker = picker.set_directory(current);
                }
                let Some(dir) = picker.pick_folder() else {
                    return Task::none();
                };
                info!("{} browsed to '{}'", field.key(), dir.display());
                PathEvent::PathChanged {
                    field,
                    path: dir.display().to_string(),
                }
            }
        };
        match self.form.handle(event) {
            Ok(DialogOutcome::Continue) => Task::none(),
            Ok(DialogOutcome::Close) => iced::exit(),
            Err(e) => {
                error!("disk dialog stopped: {e}");
                let _ = self.faults.send(e.into());
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        column![
            self.path_row(PathField::MainDisk),
            self.path_row(PathField::DriverDisk),
            row![
                horizontal_space(),
                button("cancel").on_press(Message::Form(PathEvent::Cancel)),
                button("apply").on_press(Message::Form(PathEvent::Apply)),
            ]
            .spacing(10),
        ]
        .spacing(15)
        .padding(15)
        .into()
    }

    fn path_row(&self, field: PathField) -> Element<'_, Message> {
        row![
            text(field.label()).width(Length::Fixed(180.0)),
            text_input("", self.form.path(field))
                .on_input(move |path| Message::Form(PathEvent::PathChanged { field, path }))
                .width(Length::Fill),
            button("Browse").on_press(Message::Browse(field)),
        ]
        .spacing(15)
        .align_y(Alignment::Center)
        .into()
    }
}

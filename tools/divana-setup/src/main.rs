use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use divana_app::{
    catalog::DeviceCatalog,
    config::DEFAULT_CONFIG_PATH,
    context::AudioContext,
    error::{AudioError, ConfigError, SelectionError},
    selection::SelectionController,
};
use log::info;
use thiserror::Error;

mod device_dialog;
mod disk_dialog;
mod fatal;

const APP_NAME: &str = "Divana";

#[derive(Parser)]
struct Args {
    #[arg(
        long,
        default_value = DEFAULT_CONFIG_PATH,
        help = "Configuration file to read and update"
    )]
    config: PathBuf,
    #[arg(long, help = "Edit the main/driver disk paths instead of the audio devices")]
    disk_paths: bool,
    #[arg(long, help = "Audio backend to use, otherwise the platform default")]
    host: Option<String>,
}

/// Anything that ends the session with an error. Reported once, by `fatal::report`.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error(transparent)]
    Audio(#[from] AudioError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("user interface failed: {0}")]
    Ui(#[from] iced::Error),
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match fatal::guard(|| run(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(details) => {
            fatal::report(APP_NAME, &details);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), FatalError> {
    if args.disk_paths {
        return disk_dialog::run(args.config);
    }
    // The context lives inside the controller and is released when the dialog returns.
    let context = AudioContext::open(args.host.as_deref())?;
    let mut controller = SelectionController::new(args.config, DeviceCatalog::new(context));
    controller.initialize()?;
    info!(
        "selecting devices from the {} backend",
        controller.catalog().host().backend_name()
    );
    device_dialog::run(controller)
}

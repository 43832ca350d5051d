use std::process::ExitCode;

use ascii_table::{Align, AsciiTable};
use clap::Parser;
use divana_app::{DeviceRecord, catalog::DeviceCatalog, context::AudioContext};
use log::error;

#[derive(Parser)]
struct Args {
    #[arg(long, help = "Audio backend to query, otherwise the platform default")]
    host: Option<String>,
    #[arg(long, help = "List the audio backends available on this machine and exit")]
    backends: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if args.backends {
        for name in AudioContext::available_backends() {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    let context = match AudioContext::open(args.host.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let backend = context.backend_name();
    let catalog = DeviceCatalog::new(context);

    // On some platforms enumerating devices will emit junk to the terminal:
    // https://github.com/RustAudio/cpal/issues/384
    // To minimise the impact, enumerate first and put our output at the end.
    let capture = catalog.enumerate_capture();
    let playback = catalog.enumerate_playback();
    let (capture, playback) = match (capture, playback) {
        (Ok(c), Ok(p)) => (c, p),
        (Err(e), _) | (_, Err(e)) => {
            error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("\nAudio devices reported by the {backend} backend:");
    generate_table("CAPTURE", &capture);
    generate_table("PLAYBACK", &playback);
    ExitCode::SUCCESS
}

fn generate_table(heading: &str, devices: &[DeviceRecord]) {
    if devices.is_empty() {
        println!("{heading}: none");
        return;
    }
    let data = devices.iter().map(|d| {
        [
            if d.is_default() { "*".to_owned() } else { String::new() },
            d.id().to_string(),
            d.name().to_owned(),
            d.channel_summary(),
            d.sample_rate_summary(),
            d.format_summary(),
        ]
    });

    let mut table = AsciiTable::default();
    table.column(0).set_header("DEF").set_align(Align::Center);
    table.column(1).set_header(heading).set_align(Align::Left);
    table.column(2).set_header("NAME").set_align(Align::Left);
    table.column(3).set_header("CHANNELS").set_align(Align::Right);
    table.column(4).set_header("RATES").set_align(Align::Right);
    table.column(5).set_header("FORMATS").set_align(Align::Left);
    table.print(data);
}

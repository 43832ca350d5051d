use std::{
    any::Any,
    error::Error,
    panic::{self, AssertUnwindSafe},
};

use log::error;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Run the whole session, turning both returned errors and panics into a description
/// suitable for `report`.
pub fn guard<E: Error>(session: impl FnOnce() -> Result<(), E>) -> Result<(), String> {
    match panic::catch_unwind(AssertUnwindSafe(session)) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(describe(&e)),
        Err(payload) => Err(format!("panic: {}", panic_text(payload.as_ref()))),
    }
}

/// Show a blocking error dialog with `details`.
pub fn report(app_name: &str, details: &str) {
    error!("fatal error: {details}");
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(format!("{app_name} Fatal Error"))
        .set_description(format!(
            "Fatal error happened. Execution stopped!\n\n{details}"
        ))
        .set_buttons(MessageButtons::Ok)
        .show();
}

fn describe(err: &dyn Error) -> String {
    let mut details = err.to_string();
    let mut source = err.source();
    while let Some(s) = source {
        details.push_str(&format!("\n  caused by: {s}"));
        source = s.source();
    }
    details
}

fn panic_text(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown cause"
    }
}

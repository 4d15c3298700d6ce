use std::{fs::File, io};

use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::{config::Settings, error::StorefrontError};

/// Installs the global JSON subscriber. Logs go to `LOG_PATH` when set, stderr otherwise.
pub fn init(settings: &Settings) -> Result<(), StorefrontError> {
    let writer = match &settings.log_path {
        Some(path) => BoxMakeWriter::new(File::create(path)?),
        None => BoxMakeWriter::new(io::stderr),
    };

    tracing_subscriber::
    fmt()
    .with_max_level(settings.log_level)
    .with_target(false)
    .with_ansi(false)
    .json()
    .with_file(true)
    .with_line_number(true)
    .with_current_span(true)
    .with_writer(writer)
    .init();

    Ok(())
}

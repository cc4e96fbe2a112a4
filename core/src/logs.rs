//! Console logging for the CLI.
//!
//! Library code only talks to the `log` facade. The binary installs an
//! `env_logger` backend formatted with the [`Status`] prefixes, on stderr so
//! stdout stays clean for JSON output.

use log::Level;
#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// How a status line is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Info,
    Success,
    Warning,
    Error,
}

impl Status {
    pub fn prefix(self) -> &'static str {
        match self {
            Status::Info => "  ",
            Status::Success => "  ✓",
            Status::Warning => "  ⚠️",
            Status::Error => "  ❌",
        }
    }
}

impl From<Level> for Status {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Status::Error,
            Level::Warn => Status::Warning,
            Level::Info | Level::Debug | Level::Trace => Status::Info,
        }
    }
}

/// Render one status line, indented by `indent` steps.
pub fn format_line(status: Status, message: &str, indent: u8) -> String {
    format!("{}{} {}", "   ".repeat(indent as usize), status.prefix(), message)
}

/// Logger for this crate's records only; `verbose` lets debug lines through.
///
/// Debug lines are indented one step under the info line they detail.
#[cfg(not(target_arch = "wasm32"))]
pub fn builder(verbose: bool) -> env_logger::Builder {
    use std::io::Write;

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_module("listings", level)
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            let indent = u8::from(record.level() >= Level::Debug);
            writeln!(
                buf,
                "{}",
                format_line(record.level().into(), &record.args().to_string(), indent)
            )
        });
    builder
}

/// Install the stderr logger. Later calls are ignored.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(verbose: bool) {
    let _ = builder(verbose).try_init();
}

pub fn success(message: impl AsRef<str>) {
    eprintln!("{}", format_line(Status::Success, message.as_ref(), 0));
}

pub fn warning(message: impl AsRef<str>) {
    eprintln!("{}", format_line(Status::Warning, message.as_ref(), 0));
}

pub fn detail(message: impl AsRef<str>) {
    eprintln!("{}", format_line(Status::Info, message.as_ref(), 1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(format_line(Status::Success, "Loaded 3 listings", 0), "  ✓ Loaded 3 listings");
        assert_eq!(format_line(Status::Info, "Rows: 3", 1), "      Rows: 3");
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(Status::from(Level::Warn), Status::Warning);
        assert_eq!(Status::from(Level::Error), Status::Error);
        assert_eq!(Status::from(Level::Debug), Status::Info);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_verbosity_gates_debug() {
        use log::{Log, Metadata};

        let debug = Metadata::builder().level(Level::Debug).target("listings::ingest").build();
        let info = Metadata::builder().level(Level::Info).target("listings::ingest").build();
        let foreign = Metadata::builder().level(Level::Info).target("reqwest::connect").build();

        let quiet = builder(false).build();
        assert!(quiet.enabled(&info));
        assert!(!quiet.enabled(&debug));
        assert!(!quiet.enabled(&foreign));

        let verbose = builder(true).build();
        assert!(verbose.enabled(&debug));
        assert!(!verbose.enabled(&foreign));
    }
}

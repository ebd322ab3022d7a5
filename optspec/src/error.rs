pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the engine can report. All variants are fatal to the
/// parse step that produced them; nothing is retried internally.
///
/// These are user input errors. Calling an accessor with an option name
/// that was never registered is a programmer error instead, caught by
/// `debug_assert` rather than represented here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown option -{0}")]
    UnknownOption(String),

    #[error("Option -{0} needs value")]
    MissingValue(String),

    #[error("Option -{option} needs {grammar} value")]
    InvalidNumber {
        option: String,
        value: String,
        grammar: &'static str,
    },

    #[error("Option -{option} must be {}", bounds_text(.min, .max))]
    OutOfRange {
        option: String,
        value: String,
        min: String,
        max: Option<String>,
    },

    #[error("File not found: {0}")]
    ConfigFileNotFound(String),

    #[error("Command does not allow arguments that are not options")]
    UnexpectedArguments,

    #[error("{0}")]
    BadQuoting(String),
}

fn bounds_text(min: &str, max: &Option<String>) -> String {
    match max {
        Some(max) => format!("in [{}..{}]", min, max),
        None => format!("greater than {}", min),
    }
}

/// Fatal user-facing error: report the message and terminate the command
/// with a non-zero status.
pub fn fatal(msg: &str) -> ! {
    eprintln!("{}", msg);
    std::process::exit(1);
}

use std::fmt;

#[derive(Debug)]
pub enum RunnerError {
    IoError(std::io::Error),
    WindowError(String),
    ConfigError(String),
    SettingsError(String),
    MissingMover,
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RunnerError::IoError(err) => write!(f, "IO Error: {}", err),
            RunnerError::WindowError(msg) => write!(f, "Window Error: {}", msg),
            RunnerError::ConfigError(msg) => write!(f, "Config Error: {}", msg),
            RunnerError::SettingsError(msg) => write!(f, "Settings Error: {}", msg),
            RunnerError::MissingMover => write!(f, "Character mover not found!"),
        }
    }
}

impl std::error::Error for RunnerError {}

impl From<std::io::Error> for RunnerError {
    fn from(err: std::io::Error) -> Self {
        RunnerError::IoError(err)
    }
}

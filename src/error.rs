use thiserror::Error;

// Everything that can go wrong in the crate lives in one enum. The first
// three are ordinary outcomes the CLI reports and moves on from, the io and
// json ones mean the data file itself is unusable and the run has to stop.
// The display strings double as the exact console messages
#[derive(Error, Debug)]
pub enum Error {
    #[error("No Task Found with id {0} Not Found")]
    NotFound(u32),

    // More than one task carries the same id. The save guard refuses to
    // write such a list, so hitting this means the file was edited by hand
    #[error("Error, Found More Than 1 id!!!!!!")]
    AmbiguousId(u32),

    #[error("Error, Duplicate Task id {0} Found. Save Aborted.")]
    DuplicateId(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    // Recoverable errors get printed on stdout and the process still exits
    // with 0, same as the success paths. Only a broken data file is fatal
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::AmbiguousId(_) | Self::DuplicateId(_)
        )
    }
}

use std::{
    fmt::{self, Display},
    path::PathBuf,
};

/// The two terminal states of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Saved { path: PathBuf },
    Rejected { status: u16, text: String },
}

impl Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchOutcome::Saved { path } => write!(f, "Image saved as {}", path.display()),
            FetchOutcome::Rejected { status, text } => write!(f, "Error: {}, {}", status, text),
        }
    }
}

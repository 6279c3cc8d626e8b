use std::io;

/// Utility enum to package the errors that can occur while solving and printing one equation.
#[derive(Debug)]
pub enum Error {
    /// The equation could not be solved.
    Solve(lineq_error::Error),

    /// The solution could not be serialized.
    Json(serde_json::Error),

    /// The output could not be written.
    Io(io::Error),
}

impl Error {
    /// Report this [`Error`] to stderr.
    ///
    /// Solver errors are reported with `ariadne` against `input`, which must be the normalized
    /// equation, since that is the text the error spans refer to.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Solve(err) => {
                if let Err(io_err) = err.report_to_stderr("input", input) {
                    eprintln!("{}", err);
                    tracing::warn!(%io_err, "could not render error report");
                }
            },
            Self::Json(err) => eprintln!("could not serialize solution: {}", err),
            Self::Io(err) => eprintln!("could not write output: {}", err),
        }
    }
}

impl From<lineq_error::Error> for Error {
    fn from(err: lineq_error::Error) -> Self {
        Self::Solve(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

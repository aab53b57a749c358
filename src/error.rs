//! Error type of the whole pipeline.
//!
//! Every error is fatal: the binary reports it and exits with the code from `Error::exit_code()`.

use std::path::PathBuf;
use thiserror::Error;

/// The input file an `Error::InputFormat` or `Error::Open` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFile {
    Topics,
    Preferences,
    Weights,
}

impl std::fmt::Display for InputFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            InputFile::Topics => "topics",
            InputFile::Preferences => "student preference",
            InputFile::Weights => "weights",
        })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed line in one of the input files
    #[error("Parsing error in {file} file at line {line}: {message}")]
    InputFormat {
        file: InputFile,
        line: usize,
        message: String,
    },

    /// The topics do not offer enough places for all students
    #[error(
        "Number of all topics (with potential duplicates) has to be at least the number of students, \
         but there are {capacity} places for {students} students."
    )]
    Precondition { capacity: usize, students: usize },

    /// The solver could not be started, failed or produced no readable solution
    #[error("Solver invocation failed: {0}")]
    SolverInvocation(String),

    /// A solution line does not match the `x_<student>_<topic> <value>` grammar
    #[error("Error in the output of the solver at line {line}: {message}")]
    SolutionFormat { line: usize, message: String },

    #[error("Error in the output of the solver: Student {student} should have exactly one topic but has {count}.")]
    AssignmentCardinality { student: String, count: usize },

    #[error(
        "Error in the output of the solver: Topic {topic} should have been picked at most {capacity} times but has \
         been picked {count} times."
    )]
    CapacityExceeded {
        topic: String,
        capacity: usize,
        count: usize,
    },

    /// One of the input files could not be opened
    #[error("Could not open {file} file '{}': {source}", path.display())]
    Open {
        file: InputFile,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn input(file: InputFile, line: usize, message: impl Into<String>) -> Self {
        Error::InputFormat {
            file,
            line,
            message: message.into(),
        }
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }

    /// Process exit code to report this error with
    pub fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Error::InputFormat { .. } | Error::Precondition { .. } => exitcode::DATAERR,
            Error::SolverInvocation(_) => exitcode::UNAVAILABLE,
            Error::SolutionFormat { .. }
            | Error::AssignmentCardinality { .. }
            | Error::CapacityExceeded { .. } => exitcode::SOFTWARE,
            Error::Open { .. } => exitcode::NOINPUT,
            Error::Io { .. } => exitcode::IOERR,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Error, InputFile};

    #[test]
    fn input_error_message() {
        let e = Error::input(InputFile::Preferences, 3, "topic id 0 is invalid");
        assert_eq!(
            e.to_string(),
            "Parsing error in student preference file at line 3: topic id 0 is invalid"
        );
        assert_eq!(e.exit_code(), exitcode::DATAERR);
    }

    #[test]
    fn exit_codes() {
        assert_eq!(
            Error::SolverInvocation("gone".to_owned()).exit_code(),
            exitcode::UNAVAILABLE
        );
        let e = Error::CapacityExceeded {
            topic: "Databases".to_owned(),
            capacity: 2,
            count: 3,
        };
        assert_eq!(e.exit_code(), exitcode::SOFTWARE);
        assert!(e.to_string().contains("Topic Databases"));
    }

    #[test]
    fn unopenable_input_file() {
        let path = std::path::Path::new("/nonexistent/weights.txt");
        let e = Error::Open {
            file: InputFile::Weights,
            path: path.to_owned(),
            source: std::fs::File::open(path).unwrap_err(),
        };
        assert_eq!(e.exit_code(), exitcode::NOINPUT);
        assert!(e
            .to_string()
            .starts_with("Could not open weights file '/nonexistent/weights.txt': "));
    }
}

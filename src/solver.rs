//! Invocation of the external integer program solver.
//!
//! The solver is treated as a black box behind the `Solver` trait: It takes the program text and returns the raw
//! solution as lines of `<variable> <value>`. `LpSolve` implements it by running the `lp_solve` command line tool on a
//! temporary program file.

use crate::Error;
use log::{debug, info, warn};
use std::fs::File;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// An integer program solver
pub trait Solver {
    /// Solve the given program and return the raw variable values, one `<variable> <value>` pair per line.
    fn solve(&self, program: &str) -> Result<String, Error>;
}

impl<F> Solver for F
where
    F: Fn(&str) -> Result<String, Error>,
{
    fn solve(&self, program: &str) -> Result<String, Error> {
        self(program)
    }
}

const PROGRAM_FILE: &str = "topic_assignment.lp";
const RESULT_FILE: &str = "assignment_out.txt";
const VARIABLES_HEADER: &str = "Actual values of the variables:";
const CONSTRAINTS_HEADER: &str = "Actual values of the constraints:";
const OBJECTIVE_HEADER: &str = "Value of objective function:";

/// Subprocess adapter for the `lp_solve` command line tool
#[derive(Debug, Clone)]
pub struct LpSolve {
    /// Path or name of the lp_solve executable
    pub executable: PathBuf,
    /// Additional command line arguments, passed before the program file
    pub args: Vec<String>,
    /// Directory to create the temporary working directory in. The system's default temp dir is used if None.
    pub temp_root: Option<PathBuf>,
}

impl Default for LpSolve {
    fn default() -> Self {
        LpSolve {
            executable: PathBuf::from("lp_solve"),
            args: vec!["-S3".to_owned()],
            temp_root: None,
        }
    }
}

impl LpSolve {
    pub fn new<P: Into<PathBuf>>(executable: P) -> Self {
        LpSolve {
            executable: executable.into(),
            ..Default::default()
        }
    }
}

impl Solver for LpSolve {
    fn solve(&self, program: &str) -> Result<String, Error> {
        // The directory and both files in it are removed when `dir` is dropped, on every return path.
        let mut builder = tempfile::Builder::new();
        builder.prefix("topicassign");
        let dir = match &self.temp_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .map_err(|e| Error::io("Could not create temporary directory", e))?;

        let program_path = dir.path().join(PROGRAM_FILE);
        let result_path = dir.path().join(RESULT_FILE);
        std::fs::write(&program_path, program).map_err(|e| Error::io("Could not write program file", e))?;
        let result_file = File::create(&result_path).map_err(|e| Error::io("Could not create result file", e))?;

        debug!(
            "Running {} {:?} on {}",
            self.executable.display(),
            self.args,
            program_path.display()
        );
        let output = Command::new(&self.executable)
            .args(&self.args)
            .arg(&program_path)
            .stdin(Stdio::null())
            .stdout(Stdio::from(result_file))
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                Error::SolverInvocation(format!("Could not start '{}': {}", self.executable.display(), e))
            })?;

        let result = std::fs::read_to_string(&result_path)
            .map_err(|e| Error::SolverInvocation(format!("Could not read solver output: {}", e)))?;

        // lp_solve exits with 0 for optimal and 1 for sub-optimal solutions
        match output.status.code() {
            Some(0) => (),
            Some(1) => warn!("The solver reported a sub-optimal solution."),
            _ => {
                return Err(Error::SolverInvocation(format!(
                    "'{}' failed with {}: {}",
                    self.executable.display(),
                    output.status,
                    summarize_failure(&result, &output.stderr)
                )));
            }
        }

        let variables = extract_variables(&result).ok_or_else(|| {
            Error::SolverInvocation(format!(
                "No variable values found in solver output: {}",
                summarize_failure(&result, &output.stderr)
            ))
        })?;

        if let Err(e) = dir.close() {
            warn!("Could not remove temporary solver files: {}", e);
        }
        info!("Solver finished successfully");
        Ok(variables)
    }
}

/// Extract the variable section from lp_solve's output.
///
/// Returns None if there is no such section.
fn extract_variables(output: &str) -> Option<String> {
    let mut lines = output.lines();
    while let Some(line) = lines.next() {
        let line = line.trim();
        if let Some(objective) = line.strip_prefix(OBJECTIVE_HEADER) {
            debug!("Objective value reported by solver: {}", objective.trim());
        }
        if line == VARIABLES_HEADER {
            let mut variables = String::new();
            let section = lines
                .by_ref()
                .map(str::trim)
                .take_while(|l| !l.is_empty() && !l.starts_with(CONSTRAINTS_HEADER));
            for line in section {
                variables.push_str(line);
                variables.push('\n');
            }
            return Some(variables);
        }
    }
    None
}

/// Condense the solver's messages into one line for error messages
fn summarize_failure(stdout: &str, stderr: &[u8]) -> String {
    let stderr = String::from_utf8_lossy(stderr);
    let message = stdout
        .lines()
        .chain(stderr.lines())
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<&str>>()
        .join(" ");
    if message.is_empty() {
        "no output".to_owned()
    } else {
        message
    }
}

//! Decoding of the solver's raw variable values into a student×topic 0/1 matrix.

use crate::lp::parse_variable_name;
use crate::{Error, SolutionMatrix};

/// Parse the solver output (one `x_<student>_<topic> <value>` pair per line) into a solution matrix.
///
/// Any nonzero value sets the corresponding entry. Variables not mentioned in the output stay 0. Every line, which
/// does not follow the variable naming scheme or refers to indexes outside of `num_students`×`num_topics`, is an
/// error: Such output indicates a broken solver interface, not a user error.
pub fn parse_solution(output: &str, num_students: usize, num_topics: usize) -> Result<SolutionMatrix, Error> {
    let mut solution = SolutionMatrix::from_elem([num_students, num_topics], false);
    for (i, line) in output.lines().enumerate() {
        let format_error = |message: String| Error::SolutionFormat { line: i + 1, message };

        let mut tokens = line.split_whitespace();
        let (variable, value) = match (tokens.next(), tokens.next(), tokens.next()) {
            (None, _, _) => continue,
            (Some(variable), Some(value), None) => (variable, value),
            _ => return Err(format_error(format!("expected '<variable> <value>', got '{}'", line))),
        };

        let (s, t) = parse_variable_name(variable)
            .ok_or_else(|| format_error(format!("unexpected variable name '{}'", variable)))?;
        if s >= num_students || t >= num_topics {
            return Err(format_error(format!(
                "variable '{}' is out of range for {} students and {} topics",
                variable, num_students, num_topics
            )));
        }
        let value: f64 = value
            .parse()
            .map_err(|e| format_error(format!("invalid value '{}' of {}: {}", value, variable, e)))?;
        solution[[s, t]] = value != 0.0;
    }
    Ok(solution)
}

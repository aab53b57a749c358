//! Formulation of the topic assignment as binary integer program in the lp_solve LP format.
//!
//! There is one binary variable `x_<s>_<t>` for each pair of student `s` and topic `t`. The program maximizes the
//! total reward `Σ cost[s][t] · x_<s>_<t>` subject to
//! * `Σ_s x_<s>_<t> <= capacity(t)` for each topic and
//! * `Σ_t x_<s>_<t> = 1` for each student.
//!
//! All constraints are labeled. lp_solve interprets an unlabeled relation with a single variable as a bound, which
//! would be overwritten by the `bin` declarations.

use crate::{CostMatrix, Error, Student, Topic};
use std::fmt;

/// Check that the topics offer enough places for all students.
///
/// The program would be infeasible otherwise, so this has to be checked before formulating it.
pub fn check_capacity(topics: &[Topic], students: &[Student]) -> Result<(), Error> {
    let capacity = topics.iter().fold(0usize, |acc, t| acc.saturating_add(t.capacity));
    if capacity < students.len() {
        return Err(Error::Precondition {
            capacity,
            students: students.len(),
        });
    }
    Ok(())
}

/// Name of the binary variable for assigning student `student` to topic `topic`
pub fn variable_name(student: usize, topic: usize) -> String {
    format!("x_{}_{}", student, topic)
}

/// Recover the student and topic index from a variable name generated by `variable_name()`.
///
/// Only the exact spelling produced by `variable_name()` is accepted, e.g. no leading zeros or signs.
pub fn parse_variable_name(name: &str) -> Option<(usize, usize)> {
    let mut parts = name.strip_prefix("x_")?.splitn(2, '_');
    let student = parts.next()?.parse().ok()?;
    let topic = parts.next()?.parse().ok()?;
    if variable_name(student, topic) != name {
        return None;
    }
    Some((student, topic))
}

/// The integer program for a given reward matrix and list of topics. Use its `Display` implementation to generate the
/// program text.
pub struct LpProgram<'a> {
    cost: &'a CostMatrix,
    topics: &'a [Topic],
}

impl<'a> LpProgram<'a> {
    /// The number of rows of `cost` is taken as number of students, its number of columns must match the number of
    /// topics.
    pub fn new(cost: &'a CostMatrix, topics: &'a [Topic]) -> Self {
        assert_eq!(cost.ncols(), topics.len(), "cost matrix does not match topic list");
        Self { cost, topics }
    }
}

/// Write a sum of terms, separated by " + "
fn write_sum<I, T>(f: &mut fmt::Formatter<'_>, terms: I) -> fmt::Result
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    for (i, term) in terms.into_iter().enumerate() {
        if i != 0 {
            f.write_str(" + ")?;
        }
        write!(f, "{}", term)?;
    }
    Ok(())
}

impl<'a> fmt::Display for LpProgram<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (num_students, num_topics) = self.cost.dim();
        writeln!(f, "/* Generated by topicassign */")?;
        writeln!(f)?;

        // Target function. Zero terms don't contribute anything.
        f.write_str("max: ")?;
        write_sum(
            f,
            self.cost
                .indexed_iter()
                .filter(|(_, c)| **c != 0)
                .map(|((s, t), c)| format!("{} {}", c, variable_name(s, t))),
        )?;
        writeln!(f, ";")?;
        writeln!(f)?;

        if num_students > 0 {
            writeln!(f, "/* Each topic is only picked as often as specified */")?;
            for topic in self.topics.iter() {
                write!(f, "topic_{}: ", topic.index)?;
                write_sum(f, (0..num_students).map(|s| variable_name(s, topic.index)))?;
                writeln!(f, " <= {};", topic.capacity)?;
            }
            writeln!(f)?;
        }

        if num_topics > 0 {
            writeln!(f, "/* Each student gets exactly one topic */")?;
            for s in 0..num_students {
                write!(f, "student_{}: ", s)?;
                write_sum(f, (0..num_topics).map(|t| variable_name(s, t)))?;
                writeln!(f, " = 1;")?;
            }
            writeln!(f)?;
        }

        for s in 0..num_students {
            for t in 0..num_topics {
                writeln!(f, "bin {};", variable_name(s, t))?;
            }
        }
        Ok(())
    }
}

//! Independent check of the decoded solver output against the problem constraints.
//!
//! The solver is an external process, so its result is not trusted: Every student must have exactly one topic and no
//! topic may exceed its capacity. Any violation is fatal.

use crate::{Assignment, Error, SolutionMatrix, Student, Topic};

/// Check the solution matrix and convert it into an `Assignment` (topic index for each student).
///
/// # Errors
///
/// * `Error::AssignmentCardinality` for the first student, who has not exactly one topic
/// * `Error::CapacityExceeded` for the first topic with more students than its capacity
pub fn check_solution(solution: &SolutionMatrix, topics: &[Topic], students: &[Student]) -> Result<Assignment, Error> {
    assert_eq!(solution.dim(), (students.len(), topics.len()), "solution matrix has wrong shape");

    let mut assignment = Assignment::with_capacity(students.len());
    for (student, row) in students.iter().zip(solution.outer_iter()) {
        let count = row.iter().filter(|x| **x).count();
        if count != 1 {
            return Err(Error::AssignmentCardinality {
                student: student.name.clone(),
                count,
            });
        }
        // exactly one entry is set
        if let Some(t) = row.iter().position(|x| *x) {
            assignment.push(t);
        }
    }

    for (topic, column) in topics.iter().zip(solution.columns()) {
        let count = column.iter().filter(|x| **x).count();
        if count > topic.capacity {
            return Err(Error::CapacityExceeded {
                topic: topic.name.clone(),
                capacity: topic.capacity,
                count,
            });
        }
    }

    Ok(assignment)
}

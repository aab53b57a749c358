//! Evaluation and human readable output of a validated assignment.

use crate::{Assignment, CostMatrix, Student, Topic, TotalReward};
use std::fmt::Write;

/// Count the students, whose assigned topic is none of their choices.
pub fn count_unsatisfied(assignment: &Assignment, students: &[Student]) -> usize {
    students
        .iter()
        .zip(assignment.iter())
        .filter(|(s, t)| !s.choices.contains(*t))
        .count()
}

/// Sum of the rewards of all students' assigned topics
pub fn total_reward(assignment: &Assignment, cost: &CostMatrix) -> TotalReward {
    assignment
        .iter()
        .enumerate()
        .map(|(s, t)| TotalReward::from(cost[[s, *t]]))
        .sum()
}

/// Format the assignment as one line per student, e.g.
/// ```text
/// Anton                --->    Databases
/// Berta                --->    Compiler Construction
/// ```
pub fn format_assignment(assignment: &Assignment, topics: &[Topic], students: &[Student]) -> String {
    let mut result = String::new();
    for (s, t) in students.iter().zip(assignment.iter()) {
        writeln!(result, "{:<20} --->    {}", s.name, topics[*t].name).unwrap();
    }
    result
}

/// Format the assignment grouped by topic. The output format will look like
/// ```text
/// ===== Databases =====
/// Anton
/// Berta
///
/// ===== Compiler Construction =====
/// ```
pub fn format_topic_overview(assignment: &Assignment, topics: &[Topic], students: &[Student]) -> String {
    let mut result = String::new();
    for (i, topic) in topics.iter().enumerate() {
        if i != 0 {
            result.push('\n');
        }
        writeln!(result, "===== {} =====", topic.name).unwrap();
        for (s, t) in students.iter().zip(assignment.iter()) {
            if *t == topic.index {
                writeln!(result, "{}", s.name).unwrap();
            }
        }
    }
    result
}

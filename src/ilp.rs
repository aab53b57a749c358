//! Solving the topic assignment problem as binary integer program.
//!
//! `solve()` chains the pipeline steps: It checks that there are enough topic places, builds the reward matrix,
//! formulates the program, passes it to the given `Solver`, decodes the solver's answer and validates it against the
//! problem constraints before returning it.

use crate::cost::build_cost_matrix;
use crate::lp::{check_capacity, LpProgram};
use crate::solution::parse_solution;
use crate::solver::Solver;
use crate::validation::check_solution;
use crate::{report, Assignment, Error, Reward, Student, Topic, TotalReward};
use log::{debug, info};


/// Main method of the module to calculate an optimal assignment of topics to students.
///
/// Returns the validated assignment (topic index for each student) and its total reward.
///
/// # Errors
///
/// Fails with `Error::Precondition` before building the program, if the topics' capacities sum up to less than the
/// number of students. Solver errors are passed on, decoding and validation errors of the solver output are returned
/// as `Error::SolutionFormat`, `Error::AssignmentCardinality` or `Error::CapacityExceeded`.
pub fn solve<S: Solver + ?Sized>(
    solver: &S,
    topics: &[Topic],
    students: &[Student],
    weights: &[Reward],
) -> Result<(Assignment, TotalReward), Error> {
    check_capacity(topics, students)?;
    if students.is_empty() {
        info!("No students to assign");
        return Ok((Assignment::new(), 0));
    }

    let cost = build_cost_matrix(topics.len(), students, weights);
    let program = LpProgram::new(&cost, topics).to_string();
    info!(
        "Formulated program with {} variables for {} students and {} topics",
        students.len() * topics.len(),
        students.len(),
        topics.len()
    );
    debug!("Program has {} bytes", program.len());

    let output = solver.solve(&program)?;
    let solution = parse_solution(&output, students.len(), topics.len())?;
    let assignment = check_solution(&solution, topics, students)?;

    let reward = report::total_reward(&assignment, &cost);
    info!("Found valid assignment with total reward {}", reward);
    Ok((assignment, reward))
}

/// Generate the program text for the given problem without solving it, e.g. to store it for inspection.
pub fn program_text(topics: &[Topic], students: &[Student], weights: &[Reward]) -> String {
    let cost = build_cost_matrix(topics.len(), students, weights);
    LpProgram::new(&cost, topics).to_string()
}

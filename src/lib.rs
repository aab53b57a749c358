//! Assignment of students to seminar topics by solving a binary integer program.
//!
//! The pipeline is split into small steps, each living in its own module: `cost` derives the reward matrix from the
//! students' ranked topic choices, `lp` formulates the integer program, `solver` hands it to an external solver,
//! `solution` decodes the solver's answer, `validation` re-checks it against the problem constraints and `report`
//! renders the result. `ilp::solve()` chains all of them.

pub mod cost;
pub mod error;
pub mod ilp;
pub mod io;
pub mod lp;
pub mod report;
pub mod solution;
pub mod solver;
pub mod validation;

pub use error::Error;

/// Representation of a student and their ranked topic choices
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// id/index of the Student in the list of students
    pub index: usize,
    /// Student's name. Used as unique key and for the output
    pub name: String,
    /// Ranked topic choices of the student as indexes into the list of topics. The first entry is the most preferred
    /// topic.
    pub choices: Vec<usize>,
}

/// Representation of an assignable topic
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    /// id/index of the Topic in the list of topics
    pub index: usize,
    /// Topic's name
    pub name: String,
    /// Maximum number of students
    pub capacity: usize,
}

/// Reward of a single student/topic pairing
pub type Reward = u32;

/// Sum of rewards over all students. Wider than `Reward`, as it adds up weights from the input files.
pub type TotalReward = u64;

/// Rank weights: `weights[k]` is the reward for a student getting their (k+1)-th choice.
pub type Weights = Vec<Reward>;

/// Dense student×topic reward matrix
pub type CostMatrix = ndarray::Array2<Reward>;

/// Dense student×topic 0/1 matrix as decoded from the solver output
pub type SolutionMatrix = ndarray::Array2<bool>;

/// Validated assignment: the topic index for each student
pub type Assignment = Vec<usize>;

#[cfg(test)]
fn assert_data_consitency(students: &[Student], topics: &[Topic]) {
    for (i, s) in students.iter().enumerate() {
        assert_eq!(i, s.index, "Index of {}. student is {}", i, s.index);
        for c in s.choices.iter() {
            assert!(*c < topics.len(), "Choice {} of student {} is invalid", c, i);
        }
    }
    for (i, t) in topics.iter().enumerate() {
        assert_eq!(i, t.index, "Index of {}. topic is {}", i, t.index);
        assert!(t.capacity > 0, "Topic {} has no places", i);
    }
}

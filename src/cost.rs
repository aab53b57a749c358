//! Derivation of the reward matrix from the students' ranked choices.

use crate::{CostMatrix, Reward, Student};
use log::warn;

/// Build the dense student×topic reward matrix.
///
/// `cost[[s, t]]` is `weights[k]` if topic `t` is the k-th choice of student `s`, otherwise 0. Choices beyond the end
/// of the weights vector get no reward. A topic chosen more than once keeps the weight of its first (best) rank.
pub fn build_cost_matrix(num_topics: usize, students: &[Student], weights: &[Reward]) -> CostMatrix {
    let mut cost = CostMatrix::zeros([students.len(), num_topics]);
    for (s, student) in students.iter().enumerate() {
        if student.choices.len() > weights.len() {
            warn!(
                "Student {} has {} choices, but only {} weights are given. Remaining choices get no reward.",
                student.name,
                student.choices.len(),
                weights.len()
            );
        }
        for (rank, t) in student.choices.iter().enumerate() {
            debug_assert!(*t < num_topics, "choice {} of student {} is out of range", t, s);
            if student.choices[..rank].contains(t) {
                continue;
            }
            cost[[s, *t]] = weights.get(rank).copied().unwrap_or(0);
        }
    }
    cost
}

#[cfg(test)]
mod test {
    use crate::Student;
    use proptest::prelude::*;

    fn student(index: usize, choices: Vec<usize>) -> Student {
        Student {
            index,
            name: format!("Student {}", index),
            choices,
        }
    }

    #[test]
    fn simple_cost_matrix() {
        let students = vec![student(0, vec![2, 0]), student(1, vec![]), student(2, vec![1, 2, 0])];
        let cost = super::build_cost_matrix(3, &students, &[10, 5]);

        assert_eq!(cost.dim(), (3, 3));
        assert_eq!(cost.row(0).to_vec(), vec![5, 0, 10]);
        assert_eq!(cost.row(1).to_vec(), vec![0, 0, 0]);
        // third choice exceeds the weights vector
        assert_eq!(cost.row(2).to_vec(), vec![0, 10, 5]);
    }

    #[test]
    fn repeated_choice_keeps_ranks() {
        let students = vec![student(0, vec![1, 1, 0]), student(1, vec![0, 2, 0, 1])];
        let cost = super::build_cost_matrix(3, &students, &[10, 5, 2, 1]);

        assert_eq!(cost.row(0).to_vec(), vec![2, 10, 0]);
        assert_eq!(cost.row(1).to_vec(), vec![10, 1, 5]);
    }

    proptest! {
        #[test]
        fn ranked_choices_get_their_weight(
            num_topics in 1usize..=8,
            raw_choices in prop::collection::vec(prop::collection::vec(0usize..8, 0..8), 0..10),
            weights in prop::collection::vec(1u32..100, 0..8),
        ) {
            let students: Vec<Student> = raw_choices
                .into_iter()
                .enumerate()
                .map(|(i, raw)| student(i, raw.into_iter().map(|c| c % num_topics).collect()))
                .collect();
            let cost = super::build_cost_matrix(num_topics, &students, &weights);

            for (s, st) in students.iter().enumerate() {
                for t in 0..num_topics {
                    let expected = match st.choices.iter().position(|c| *c == t) {
                        Some(rank) => weights.get(rank).copied().unwrap_or(0),
                        None => 0,
                    };
                    prop_assert_eq!(cost[[s, t]], expected);
                }
            }
        }
    }
}

//! Parsers for the three plain text input files: topics, student preferences and rank weights.

use crate::error::InputFile;
use crate::{Error, Reward, Student, Topic, Weights};
use log::{info, warn};
use std::collections::BTreeMap;
use std::io::{BufRead, BufReader};

/// Read the list of topics from a topics file.
///
/// Each line has the form `<multiplicity>x<name>`, e.g. `2xDatabases`. The multiplicity is the maximum number of
/// students for this topic, the name is the remainder of the line after the first `x`. Lines with an empty name are
/// skipped.
pub fn read_topics<R: std::io::Read>(reader: R) -> Result<Vec<Topic>, Error> {
    let mut topics = Vec::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(|e| Error::io("Could not read topics file", e))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (num, name) = line.split_at(
            line.find('x')
                .ok_or_else(|| Error::input(InputFile::Topics, i + 1, "missing multiplicity, e.g. '1x'"))?,
        );
        let name = &name[1..];
        if name.is_empty() {
            continue;
        }
        let capacity: usize = num.trim().parse().map_err(|e: std::num::ParseIntError| {
            Error::input(InputFile::Topics, i + 1, format!("invalid multiplicity '{}': {}", num, e))
        })?;
        if capacity == 0 {
            return Err(Error::input(
                InputFile::Topics,
                i + 1,
                format!("topic '{}' has multiplicity 0", name),
            ));
        }

        topics.push(Topic {
            index: topics.len(),
            name: name.to_owned(),
            capacity,
        });
    }

    Ok(topics)
}

/// Read the students and their ranked topic choices from a student preference file.
///
/// Each line has the form `<name> <choice1> <choice2> ...`, choices being 1-based topic ids ordered by preference.
/// They are converted to 0-based topic indexes, keeping their position in the line as rank (even if a topic is
/// repeated). The returned students are ordered by name.
///
/// # Errors
///
/// Fails with `Error::InputFormat` citing the line number, if a choice is no number, is 0 or exceeds `num_topics`.
pub fn read_preferences<R: std::io::Read>(reader: R, num_topics: usize) -> Result<Vec<Student>, Error> {
    let mut students = BTreeMap::<String, Vec<usize>>::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(|e| Error::io("Could not read student preference file", e))?;
        let mut tokens = line.split_whitespace();
        let name = match tokens.next() {
            Some(name) => name,
            None => continue,
        };

        let mut choices = Vec::new();
        for token in tokens {
            let choice: usize = token.parse().map_err(|e: std::num::ParseIntError| {
                Error::input(InputFile::Preferences, i + 1, format!("invalid topic id '{}': {}", token, e))
            })?;
            if choice == 0 || choice > num_topics {
                return Err(Error::input(
                    InputFile::Preferences,
                    i + 1,
                    format!("topic id {} is not within 1..={}", choice, num_topics),
                ));
            }
            if choices.contains(&(choice - 1)) {
                warn!(
                    "Student {} chose topic {} more than once. Only its first rank will be rewarded.",
                    name, choice
                );
            }
            // Repetitions are kept, so that the following choices keep their rank
            choices.push(choice - 1);
        }

        if students.contains_key(name) {
            warn!("Student {} is listed more than once. Ignoring line {}.", name, i + 1);
            continue;
        }
        students.insert(name.to_owned(), choices);
    }

    Ok(students
        .into_iter()
        .enumerate()
        .map(|(index, (name, choices))| Student { index, name, choices })
        .collect())
}

/// Read the rank weights: whitespace separated non-negative integers, the k-th number being the reward for a
/// student's k-th choice.
pub fn read_weights<R: std::io::Read>(reader: R) -> Result<Weights, Error> {
    let mut weights = Vec::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(|e| Error::io("Could not read weights file", e))?;
        for token in line.split_whitespace() {
            let weight: Reward = token.parse().map_err(|e: std::num::ParseIntError| {
                Error::input(InputFile::Weights, i + 1, format!("invalid weight '{}': {}", token, e))
            })?;
            weights.push(weight);
        }
    }
    info!("Read {} rank weights", weights.len());

    Ok(weights)
}

#[cfg(test)]
mod test {
    use crate::error::InputFile;
    use crate::Error;

    #[test]
    fn parse_topics_file() {
        let data = include_bytes!("../test_ressources/topics.txt");
        let topics = super::read_topics(&data[..]).unwrap();

        assert_eq!(topics.len(), 4);
        assert_eq!(topics[0].name, "Databases");
        assert_eq!(topics[0].capacity, 2);
        assert_eq!(topics[1].name, "Compiler Construction");
        assert_eq!(topics[1].capacity, 1);
        // Only the first 'x' separates multiplicity and name
        assert_eq!(topics[2].name, "Complexity Theory");
        assert_eq!(topics[3].name, "Linux Kernel");
        assert_eq!(topics[3].capacity, 12);
        for (i, t) in topics.iter().enumerate() {
            assert_eq!(t.index, i);
        }
    }

    #[test]
    fn topics_with_empty_name_are_skipped() {
        let topics = super::read_topics(&b"1xA\n3x\n\n2xB\r\n"[..]).unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[1].name, "B");
        assert_eq!(topics[1].index, 1);
        assert_eq!(topics[1].capacity, 2);
    }

    #[test]
    fn malformed_topics() {
        match super::read_topics(&b"1xA\nB\n"[..]) {
            Err(Error::InputFormat { file, line, .. }) => {
                assert_eq!(file, InputFile::Topics);
                assert_eq!(line, 2);
            }
            r => panic!("Unexpected result {:?}", r),
        }
        assert!(matches!(
            super::read_topics(&b"zweixA\n"[..]),
            Err(Error::InputFormat { line: 1, .. })
        ));
        assert!(matches!(
            super::read_topics(&b"1xA\n0xB\n"[..]),
            Err(Error::InputFormat { line: 2, .. })
        ));
    }

    #[test]
    fn parse_preferences_file() {
        let data = include_bytes!("../test_ressources/preferences.txt");
        let students = super::read_preferences(&data[..], 4).unwrap();

        crate::assert_data_consitency(
            &students,
            &super::read_topics(&include_bytes!("../test_ressources/topics.txt")[..]).unwrap(),
        );
        assert_eq!(students.len(), 5);
        // ordered by name
        let names: Vec<&str> = students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Anton", "Berta", "Charly", "Dora", "Emil"]);
        assert_eq!(students[0].choices, vec![0, 1, 2]);
        assert_eq!(students[2].choices, vec![3, 0]);
        assert_eq!(students[4].choices, Vec::<usize>::new());
    }

    #[test]
    fn preference_zero_is_rejected_with_line_number() {
        let data = b"Anton 1 2\nBerta 2 1\nCharly 0 1\n";
        match super::read_preferences(&data[..], 2) {
            Err(Error::InputFormat { file, line, .. }) => {
                assert_eq!(file, InputFile::Preferences);
                assert_eq!(line, 3);
            }
            r => panic!("Unexpected result {:?}", r),
        }
    }

    #[test]
    fn preference_out_of_range_or_garbage() {
        assert!(matches!(
            super::read_preferences(&b"Anton 1 3\n"[..], 2),
            Err(Error::InputFormat { line: 1, .. })
        ));
        assert!(matches!(
            super::read_preferences(&b"Anton 1\nBerta eins\n"[..], 2),
            Err(Error::InputFormat { line: 2, .. })
        ));
    }

    #[test]
    fn duplicate_names_and_choices() {
        let data = b"Berta 2 2 1\nAnton 1\nBerta 1\n";
        let students = super::read_preferences(&data[..], 2).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].name, "Anton");
        assert_eq!(students[1].name, "Berta");
        assert_eq!(students[1].choices, vec![1, 1, 0]);
        assert_eq!(students[1].index, 1);

        // Topic 1 is Berta's third choice and gets the third weight
        let cost = crate::cost::build_cost_matrix(2, &students, &[10, 5, 2]);
        assert_eq!(cost.row(1).to_vec(), vec![2, 10]);
    }

    #[test]
    fn parse_weights() {
        let data = include_bytes!("../test_ressources/weights.txt");
        assert_eq!(super::read_weights(&data[..]).unwrap(), vec![10, 5, 2, 1]);
        assert_eq!(super::read_weights(&b"3 2\n\n1"[..]).unwrap(), vec![3, 2, 1]);
        assert!(matches!(
            super::read_weights(&b"3\n-2\n"[..]),
            Err(Error::InputFormat { file: InputFile::Weights, line: 2, .. })
        ));
    }
}

use crate::{Assignment, Error, Student, Topic, TotalReward};
use serde::Serialize;
use serde_json::json;

/// A single line of the machine readable result
#[derive(Serialize, Debug)]
struct AssignedTopic<'a> {
    student: &'a str,
    topic: &'a str,
}

/// Write the calculated topic assignment as simple JSON representation to a Writer (e.g. an output file).
///
/// Students and topics are referenced by name, raw indexes are not part of the output.
pub fn write<W: std::io::Write>(
    writer: W,
    assignment: &Assignment,
    topics: &[Topic],
    students: &[Student],
    unsatisfied: usize,
    total_reward: TotalReward,
) -> Result<(), Error> {
    let assigned: Vec<AssignedTopic> = students
        .iter()
        .zip(assignment.iter())
        .map(|(s, t)| AssignedTopic {
            student: &s.name,
            topic: &topics[*t].name,
        })
        .collect();
    let data = json!({
        "format": "X-topicassignment-simple",
        "version": "1.0",
        "unsatisfied": unsatisfied,
        "total_reward": total_reward,
        "assignment": assigned,
    });
    serde_json::to_writer_pretty(writer, &data)
        .map_err(|e| Error::io("Could not write result file", e.into()))?;

    Ok(())
}

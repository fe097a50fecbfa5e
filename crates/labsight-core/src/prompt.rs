//! The three questions asked about every lab report.

use std::fmt;

use crate::models::test_result::TestResult;

const PREFIX: &str = "In medical context, can you help me";

/// One of the questions put to the text-generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Question {
    /// What the tests are.
    Definition,
    /// What the measured values mean.
    Analysis,
    /// How to improve the measured values.
    Recommendation,
}

impl Question {
    pub const ALL: [Question; 3] = [
        Question::Definition,
        Question::Analysis,
        Question::Recommendation,
    ];

    /// Build the prompt for this question. An empty `results` slice still
    /// produces a prompt.
    pub fn prompt(self, results: &[TestResult]) -> String {
        match self {
            Question::Definition => {
                format!("{PREFIX} explain what is {}", join_names(results))
            }
            Question::Analysis => {
                format!("{PREFIX} analyze {}", join_measurements(results))
            }
            Question::Recommendation => {
                format!("{PREFIX} how to improve {}", join_measurements(results))
            }
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Question::Definition => "definition",
            Question::Analysis => "analysis",
            Question::Recommendation => "recommendation",
        };
        f.write_str(label)
    }
}

fn join_names(results: &[TestResult]) -> String {
    results
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

fn join_measurements(results: &[TestResult]) -> String {
    results
        .iter()
        .map(|r| format!("value {} for {}", r.value, r.name))
        .collect::<Vec<_>>()
        .join(",")
}

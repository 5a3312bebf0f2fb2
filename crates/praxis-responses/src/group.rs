//! Grouping of responses by template section.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use praxis_core::models::response::QuestionResponse;
use praxis_core::models::template::{Question, Section};

use crate::display::display_value;

/// One response joined with its question and its formatted display string.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnsweredQuestion {
    pub response: QuestionResponse,
    pub question: Question,
    pub display: String,
}

/// All answered questions belonging to one template section.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionAnswers {
    pub section_id: Uuid,
    pub section_title: String,
    pub entries: Vec<AnsweredQuestion>,
}

/// The normalized answer-display model for one completed assignment.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GroupedResponses {
    /// Sections that received at least one response, in template order.
    pub sections: Vec<SectionAnswers>,
    /// Responses whose question id matches no question in the template —
    /// typically a question deleted after the response was captured. Counted
    /// and excluded rather than silently dropped; callers decide whether to
    /// log or surface them.
    pub orphaned: Vec<QuestionResponse>,
}

impl GroupedResponses {
    pub fn orphaned_count(&self) -> usize {
        self.orphaned.len()
    }
}

/// Group responses under their template sections, in section order.
///
/// Each response is matched to its question by scanning the sections'
/// question lists; entries keep the order the responses were submitted in.
/// Sections with no responses are omitted.
pub fn group_by_section(
    responses: &[QuestionResponse],
    sections: &[Section],
) -> GroupedResponses {
    let mut grouped: Vec<SectionAnswers> = sections
        .iter()
        .map(|section| SectionAnswers {
            section_id: section.id,
            section_title: section.title.clone(),
            entries: Vec::new(),
        })
        .collect();
    let mut orphaned = Vec::new();

    for response in responses {
        let hit = sections.iter().enumerate().find_map(|(index, section)| {
            section
                .questions
                .iter()
                .find(|q| q.id == response.question_id)
                .map(|q| (index, q))
        });
        match hit {
            Some((section_index, question)) => {
                grouped[section_index].entries.push(AnsweredQuestion {
                    response: response.clone(),
                    question: question.clone(),
                    display: display_value(response, question),
                });
            }
            None => orphaned.push(response.clone()),
        }
    }

    grouped.retain(|section| !section.entries.is_empty());

    GroupedResponses {
        sections: grouped,
        orphaned,
    }
}

/// Format grouped responses as structured markdown for the drafting prompt.
pub fn render_summary(grouped: &GroupedResponses) -> String {
    let mut output = String::new();
    for section in &grouped.sections {
        output.push_str(&format!("## {}\n\n", section.section_title));
        for entry in &section.entries {
            output.push_str(&format!("- {}: {}\n", entry.question.text, entry.display));
        }
        output.push('\n');
    }
    output
}

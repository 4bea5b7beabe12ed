use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single completed lesson or exam. Unique by `(unit, lesson_index)`.
///
/// Serialized as `week` for backwards compatibility with the stored weekly
/// trail documents; `module` is accepted on input for old contest-prep
/// entries.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedLesson {
    #[serde(rename = "week", alias = "module")]
    pub unit: i32,
    pub lesson_index: i32,
    #[serde(default)]
    pub score: i32,
}

/// Per-user progress. Created implicitly on first write, persists
/// indefinitely. Entries are append-only: the first recorded score for a
/// lesson sticks and re-completion never overwrites it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default)]
    pub completed_weeks: Vec<i32>,
    #[serde(default)]
    pub completed_modules: Vec<i32>,
    #[serde(default)]
    pub completed_lessons: Vec<CompletedLesson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProgressRecord {
    pub fn lesson(&self, unit: i32, lesson_index: i32) -> Option<&CompletedLesson> {
        self.completed_lessons
            .iter()
            .find(|l| l.unit == unit && l.lesson_index == lesson_index)
    }

    /// Appends a completion entry unless one already exists for the same
    /// `(unit, lesson_index)` pair. Returns whether the entry was added.
    pub fn record_lesson(&mut self, unit: i32, lesson_index: i32, score: i32) -> bool {
        if self.lesson(unit, lesson_index).is_some() {
            return false;
        }
        self.completed_lessons.push(CompletedLesson {
            unit,
            lesson_index,
            score,
        });
        true
    }

    pub fn record_week(&mut self, week: i32) -> bool {
        if self.completed_weeks.contains(&week) {
            return false;
        }
        self.completed_weeks.push(week);
        true
    }

    pub fn record_module(&mut self, module: i32) -> bool {
        if self.completed_modules.contains(&module) {
            return false;
        }
        self.completed_modules.push(module);
        true
    }

    /// Set-union reconciliation of a server copy into this (local) record.
    /// Lessons are keyed by `(unit, lesson_index)`, units by plain id; on a
    /// key collision the local entry wins and the server one is discarded.
    pub fn merge_from(&mut self, server: &ProgressRecord) {
        for lesson in &server.completed_lessons {
            if self.lesson(lesson.unit, lesson.lesson_index).is_none() {
                self.completed_lessons.push(lesson.clone());
            }
        }
        for week in &server.completed_weeks {
            if !self.completed_weeks.contains(week) {
                self.completed_weeks.push(*week);
            }
        }
        for module in &server.completed_modules {
            if !self.completed_modules.contains(module) {
                self.completed_modules.push(*module);
            }
        }
    }

    /// True when this record holds completions the other does not — the
    /// signal that a background write-back sync is worthwhile.
    pub fn extends(&self, other: &ProgressRecord) -> bool {
        self.completed_lessons.len() > other.completed_lessons.len()
            || self.completed_weeks.len() > other.completed_weeks.len()
            || self.completed_modules.len() > other.completed_modules.len()
    }
}

//! Unlock/complete/score engine for the curriculum trails.
//!
//! Pure and total over `(&Trail, &ProgressRecord)`: predicates never fail,
//! malformed progress entries are simply never found, and nothing here
//! performs I/O or caching — every value is recomputed on read.

use crate::curriculum::Trail;
use crate::models::domain::ProgressRecord;

pub struct Progression<'a> {
    trail: &'a Trail,
    record: &'a ProgressRecord,
}

impl<'a> Progression<'a> {
    pub fn new(trail: &'a Trail, record: &'a ProgressRecord) -> Self {
        Self { trail, record }
    }

    /// Any recorded score counts as complete, including 0. There is no pass
    /// threshold; see the product decision log before changing this.
    pub fn is_lesson_complete(&self, unit: i32, lesson_index: i32) -> bool {
        self.record.lesson(unit, lesson_index).is_some()
    }

    /// A unit is complete when its terminal node (summary exam or final
    /// subject) is complete.
    pub fn is_unit_complete(&self, unit: i32) -> bool {
        match self.trail.unit(unit) {
            Some(u) => self.is_lesson_complete(unit, u.terminal_index()),
            None => false,
        }
    }

    /// Strict linear gate across units: the first unit is always open, every
    /// other one requires the immediately preceding unit (by ordinal
    /// position) to be complete. No skipping, no parallel unlocks.
    pub fn is_unit_unlocked(&self, unit: i32) -> bool {
        match self.trail.position(unit) {
            Some(0) => true,
            Some(pos) => {
                let previous = &self.trail.units[pos - 1];
                self.is_unit_complete(previous.number)
            }
            None => false,
        }
    }

    /// Three nested gates, each strictly sequential:
    /// - the containing unit must be unlocked;
    /// - the first lesson of a sub-unit requires every lesson of the previous
    ///   sub-unit to be complete (the first sub-unit is open by default);
    /// - any later lesson requires the immediately preceding flat index.
    pub fn is_lesson_unlocked(&self, unit: i32, lesson_index: i32) -> bool {
        let Some(u) = self.trail.unit(unit) else {
            return false;
        };
        if !self.is_unit_unlocked(unit) {
            return false;
        }
        let Some((sub_pos, lesson_pos)) = u.locate(lesson_index) else {
            return false;
        };

        if lesson_pos == 0 {
            if sub_pos == 0 {
                return true;
            }
            let previous = &u.sub_units[sub_pos - 1];
            previous
                .lessons
                .iter()
                .all(|l| self.is_lesson_complete(unit, l.index))
        } else {
            self.is_lesson_complete(unit, lesson_index - 1)
        }
    }

    /// Arithmetic mean of the recorded scores within a unit, rounded to the
    /// nearest integer. `None` when nothing has been recorded yet.
    pub fn unit_average_score(&self, unit: i32) -> Option<i32> {
        let scores: Vec<i32> = self
            .record
            .completed_lessons
            .iter()
            .filter(|l| l.unit == unit)
            .map(|l| l.score)
            .collect();
        if scores.is_empty() {
            return None;
        }
        let sum: i64 = scores.iter().map(|s| *s as i64).sum();
        Some((sum as f64 / scores.len() as f64).round() as i32)
    }
}

//! Static curriculum topologies.
//!
//! The trails are code-defined constants, never persisted. The canonical
//! lesson address is `(unit number, flat lesson index)`; day/subject and
//! position-within-day are derived views, never stored alongside it.

pub const WEEK_COUNT: i32 = 40;
pub const DAYS_PER_WEEK: i32 = 5;
pub const LESSONS_PER_DAY: i32 = 2;
/// Flat index of the weekly summary exam (day 6, the 11th slot).
pub const WEEK_EXAM_INDEX: i32 = 10;

pub const MODULE_COUNT: i32 = 10;
pub const SUBJECTS_PER_MODULE: i32 = 9;
/// Content for module N is stored under internal week id `N + 100`.
pub const MODULE_WEEK_OFFSET: i32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonKind {
    Lesson,
    Exam,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LessonSlot {
    pub index: i32,
    pub kind: LessonKind,
}

/// A day (exam-prep) or a subject (contest-prep) within a unit.
#[derive(Clone, Debug)]
pub struct SubUnit {
    pub number: i32,
    pub lessons: Vec<LessonSlot>,
}

/// A week or a module. The last lesson slot is the terminal node whose
/// completion marks the whole unit complete.
#[derive(Clone, Debug)]
pub struct Unit {
    pub number: i32,
    pub sub_units: Vec<SubUnit>,
}

impl Unit {
    pub fn terminal_index(&self) -> i32 {
        self.sub_units
            .last()
            .and_then(|s| s.lessons.last())
            .map(|l| l.index)
            .unwrap_or(0)
    }

    pub fn lesson_slots(&self) -> impl Iterator<Item = &LessonSlot> {
        self.sub_units.iter().flat_map(|s| s.lessons.iter())
    }

    /// Derived view: which sub-unit holds a flat index, and at what position
    /// inside it.
    pub fn locate(&self, lesson_index: i32) -> Option<(usize, usize)> {
        for (sub_pos, sub_unit) in self.sub_units.iter().enumerate() {
            if let Some(pos) = sub_unit
                .lessons
                .iter()
                .position(|l| l.index == lesson_index)
            {
                return Some((sub_pos, pos));
            }
        }
        None
    }
}

#[derive(Clone, Debug)]
pub struct Trail {
    pub units: Vec<Unit>,
}

impl Trail {
    /// Exam-prep trail: 40 weeks of 5 days with 2 lessons each (flat indices
    /// 0..=9) plus a 6th day holding only the summary exam (index 10).
    pub fn weekly() -> Trail {
        let units = (1..=WEEK_COUNT)
            .map(|week| {
                let mut sub_units: Vec<SubUnit> = (1..=DAYS_PER_WEEK)
                    .map(|day| SubUnit {
                        number: day,
                        lessons: (0..LESSONS_PER_DAY)
                            .map(|slot| LessonSlot {
                                index: (day - 1) * LESSONS_PER_DAY + slot,
                                kind: LessonKind::Lesson,
                            })
                            .collect(),
                    })
                    .collect();
                sub_units.push(SubUnit {
                    number: DAYS_PER_WEEK + 1,
                    lessons: vec![LessonSlot {
                        index: WEEK_EXAM_INDEX,
                        kind: LessonKind::Exam,
                    }],
                });
                Unit {
                    number: week,
                    sub_units,
                }
            })
            .collect();
        Trail { units }
    }

    /// Contest-prep trail: 10 modules of 9 subject lessons (flat indices
    /// 0..=8); the last subject is the terminal node. The module exam is
    /// assembled out-of-band and addressed via its own endpoint.
    pub fn modules() -> Trail {
        let units = (1..=MODULE_COUNT)
            .map(|module| Unit {
                number: module,
                sub_units: (1..=SUBJECTS_PER_MODULE)
                    .map(|subject| SubUnit {
                        number: subject,
                        lessons: vec![LessonSlot {
                            index: subject - 1,
                            kind: LessonKind::Lesson,
                        }],
                    })
                    .collect(),
            })
            .collect();
        Trail { units }
    }

    pub fn unit(&self, number: i32) -> Option<&Unit> {
        self.units.iter().find(|u| u.number == number)
    }

    /// Ordinal position of a unit in the trail, for the strict linear gate.
    pub fn position(&self, number: i32) -> Option<usize> {
        self.units.iter().position(|u| u.number == number)
    }
}

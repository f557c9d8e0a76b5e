use uuid::Uuid;

use crate::models::{RosterState, Student};

/// State transitions recognized by the roster.
#[derive(Debug, Clone)]
pub enum RosterAction {
    /// Wholesale replacement, used once when the mirror file is read.
    SetInitialState(Vec<Student>),
    /// Prepend a new student to the front of the list.
    AddStudent(Student),
    /// Drop the first (newest) student.
    RemoveFirst,
    /// Adjust one student's absence count by `change` (may be negative).
    UpdateAbsent { id: Uuid, change: i32 },
}

/// Pure transition function: never mutates `state`, always returns the
/// next roster. Two long-standing quirks are kept intact: `AddStudent`
/// does not fold the new record's absences into the total, and
/// `UpdateAbsent` moves the total even when no record matches.
pub fn reduce(state: &RosterState, action: RosterAction) -> RosterState {
    match action {
        RosterAction::SetInitialState(students) => {
            let total_absents = sum_absents(&students);
            RosterState {
                students,
                total_absents,
            }
        }
        RosterAction::AddStudent(student) => {
            let mut students = Vec::with_capacity(state.students.len() + 1);
            students.push(student);
            students.extend(state.students.iter().cloned());
            RosterState {
                students,
                total_absents: state.total_absents,
            }
        }
        RosterAction::RemoveFirst => {
            let removed_absents = state
                .students
                .first()
                .map(|student| i64::from(student.absents))
                .unwrap_or(0);
            RosterState {
                students: state.students.iter().skip(1).cloned().collect(),
                total_absents: state.total_absents - removed_absents,
            }
        }
        RosterAction::UpdateAbsent { id, change } => RosterState {
            students: state
                .students
                .iter()
                .map(|student| {
                    if student.id == id {
                        Student {
                            absents: student.absents + change,
                            ..student.clone()
                        }
                    } else {
                        student.clone()
                    }
                })
                .collect(),
            total_absents: state.total_absents + i64::from(change),
        },
    }
}

pub fn sum_absents(students: &[Student]) -> i64 {
    students
        .iter()
        .map(|student| i64::from(student.absents))
        .sum()
}

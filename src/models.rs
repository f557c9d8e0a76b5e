use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single roster entry. Fields serialize in camelCase so the JSON mirror
/// keeps the shape the front-end apps persisted to local storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub absents: i32,
    pub is_graduated: bool,
    pub courses_list: Vec<String>,
}

/// Roster held in memory: the ordered student list (newest first) plus a
/// running absence total derived from it.
#[derive(Debug, Clone, Default)]
pub struct RosterState {
    pub students: Vec<Student>,
    pub total_absents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub is_completed: bool,
    pub is_urgent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoStats {
    pub created: usize,
    pub completed: usize,
    pub urgent: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
    pub due_date: NaiveDate,
}

use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::{RosterState, Student};

pub struct CourseSummary {
    pub course: String,
    pub count: usize,
}

pub fn summarize_by_course(students: &[Student]) -> Vec<CourseSummary> {
    let mut map: std::collections::HashMap<String, usize> = std::collections::HashMap::new();

    for student in students {
        for course in &student.courses_list {
            *map.entry(course.clone()).or_insert(0) += 1;
        }
    }

    let mut summaries: Vec<CourseSummary> = map
        .into_iter()
        .map(|(course, count)| CourseSummary { course, count })
        .collect();

    summaries.sort_by(|a, b| b.count.cmp(&a.count).then(a.course.cmp(&b.course)));
    summaries
}

pub fn build_report(state: &RosterState, generated_on: NaiveDate) -> String {
    let summaries = summarize_by_course(&state.students);
    let graduated = state
        .students
        .iter()
        .filter(|student| student.is_graduated)
        .count();

    let mut output = String::new();

    let _ = writeln!(output, "# Student Roster Report");
    let _ = writeln!(
        output,
        "Generated on {} ({} students, {} total absences)",
        generated_on,
        state.students.len(),
        state.total_absents
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Graduation Mix");

    if state.students.is_empty() {
        let _ = writeln!(output, "No students on the roster.");
    } else {
        let _ = writeln!(output, "- graduated: {}", graduated);
        let _ = writeln!(output, "- not graduated: {}", state.students.len() - graduated);
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Course Enrolment");

    if summaries.is_empty() {
        let _ = writeln!(output, "No course enrolments recorded.");
    } else {
        for summary in summaries.iter() {
            let _ = writeln!(output, "- {}: {} students", summary.course, summary.count);
        }
    }

    let mut most_absent = state.students.clone();
    most_absent.sort_by(|a, b| b.absents.cmp(&a.absents));
    let _ = writeln!(output);
    let _ = writeln!(output, "## Most Absent Students");

    if most_absent.is_empty() {
        let _ = writeln!(output, "No students on the roster.");
    } else {
        for student in most_absent.iter().take(5) {
            let _ = writeln!(
                output,
                "- {} (age {}): {} absences",
                student.name, student.age, student.absents
            );
        }
    }

    output
}

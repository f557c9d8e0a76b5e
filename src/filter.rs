use crate::models::{Student, Task};

/// Graduation tri-state. Anything other than `grad` / `non-grad` in the
/// query string means no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Graduation {
    #[default]
    All,
    Graduated,
    NotGraduated,
}

impl Graduation {
    pub fn parse(value: &str) -> Graduation {
        match value {
            "grad" => Graduation::Graduated,
            "non-grad" => Graduation::NotGraduated,
            _ => Graduation::All,
        }
    }
}

/// Filter constraints as supplied by the query-string layer. Every field
/// is optional; an absent field filters nothing.
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub query: Option<String>,
    pub graduated: Graduation,
    pub courses: Vec<String>,
    pub min_absents: Option<i32>,
    pub max_absents: Option<i32>,
}

impl FilterParams {
    /// Builds params from raw `(key, value)` query pairs. Repeated
    /// `courses` keys accumulate, later scalar keys overwrite earlier
    /// ones, and unknown keys are ignored. An absence bound that does not
    /// parse as an integer counts as absent.
    pub fn from_pairs<'a, I>(pairs: I) -> FilterParams
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut params = FilterParams::default();
        for (key, value) in pairs {
            match key {
                "q" => {
                    params.query = if value.is_empty() {
                        None
                    } else {
                        Some(value.to_string())
                    };
                }
                "graduated" => params.graduated = Graduation::parse(value),
                "courses" => params.courses.push(value.to_string()),
                "minAbs" => params.min_absents = value.parse().ok(),
                "maxAbs" => params.max_absents = value.parse().ok(),
                _ => {}
            }
        }
        params
    }
}

/// Narrows the full list to the records satisfying every active
/// constraint. Filters apply sequentially as a logical AND and never
/// reorder the input.
pub fn filter_students(students: &[Student], params: &FilterParams) -> Vec<Student> {
    let mut filtered: Vec<Student> = students.to_vec();

    if let Some(query) = params.query.as_deref() {
        let needle = query.to_lowercase();
        filtered.retain(|student| student.name.to_lowercase().contains(&needle));
    }

    match params.graduated {
        Graduation::Graduated => filtered.retain(|student| student.is_graduated),
        Graduation::NotGraduated => filtered.retain(|student| !student.is_graduated),
        Graduation::All => {}
    }

    if !params.courses.is_empty() {
        filtered.retain(|student| {
            params
                .courses
                .iter()
                .all(|course| student.courses_list.contains(course))
        });
    }

    if let Some(min) = params.min_absents {
        filtered.retain(|student| student.absents >= min);
    }
    if let Some(max) = params.max_absents {
        filtered.retain(|student| student.absents <= max);
    }

    filtered
}

/// Completion tri-state for task lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

/// Status narrowing followed by a case-insensitive title search; an empty
/// query filters nothing. Stable order, like the student pipeline.
pub fn filter_tasks(tasks: &[Task], status: StatusFilter, query: &str) -> Vec<Task> {
    let mut filtered: Vec<Task> = tasks.to_vec();

    match status {
        StatusFilter::Completed => filtered.retain(|task| task.completed),
        StatusFilter::Pending => filtered.retain(|task| !task.completed),
        StatusFilter::All => {}
    }

    if !query.is_empty() {
        let needle = query.to_lowercase();
        filtered.retain(|task| task.title.to_lowercase().contains(&needle));
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    use crate::models::Priority;

    fn student(name: &str, absents: i32, graduated: bool, courses: &[&str]) -> Student {
        Student {
            id: Uuid::new_v4(),
            name: name.to_string(),
            age: 20,
            absents,
            is_graduated: graduated,
            courses_list: courses.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn roster() -> Vec<Student> {
        vec![
            student("Ann", 2, false, &["Math"]),
            student("Ben", 5, true, &["Math", "CSS"]),
        ]
    }

    #[test]
    fn no_params_keeps_everything_in_order() {
        let students = roster();
        let filtered = filter_students(&students, &FilterParams::default());
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "Ann");
        assert_eq!(filtered[1].name, "Ben");
    }

    #[test]
    fn name_search_is_case_insensitive_substring() {
        let students = roster();
        let params = FilterParams::from_pairs([("q", "EN")]);
        let filtered = filter_students(&students, &params);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Ben");
    }

    #[test]
    fn graduation_filter_keeps_matching_state() {
        let students = roster();
        let grad = filter_students(&students, &FilterParams::from_pairs([("graduated", "grad")]));
        assert_eq!(grad.len(), 1);
        assert!(grad[0].is_graduated);

        let non = filter_students(
            &students,
            &FilterParams::from_pairs([("graduated", "non-grad")]),
        );
        assert_eq!(non.len(), 1);
        assert!(!non[0].is_graduated);

        let other = filter_students(
            &students,
            &FilterParams::from_pairs([("graduated", "whatever")]),
        );
        assert_eq!(other.len(), 2);
    }

    #[test]
    fn course_filter_requires_every_listed_course() {
        let students = roster();
        let params = FilterParams::from_pairs([("courses", "Math"), ("courses", "CSS")]);
        let filtered = filter_students(&students, &params);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Ben");
    }

    #[test]
    fn min_absents_scenario_keeps_only_ben() {
        let students = roster();
        let params = FilterParams::from_pairs([("minAbs", "3")]);
        let filtered = filter_students(&students, &params);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Ben");
    }

    #[test]
    fn absence_range_is_inclusive_on_both_ends() {
        let students = vec![
            student("Ann", 2, false, &[]),
            student("Ben", 5, true, &[]),
            student("Cleo", 8, false, &[]),
        ];
        let params = FilterParams::from_pairs([("minAbs", "2"), ("maxAbs", "5")]);
        let filtered = filter_students(&students, &params);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "Ann");
        assert_eq!(filtered[1].name, "Ben");

        let max_only = filter_students(&students, &FilterParams::from_pairs([("maxAbs", "5")]));
        assert_eq!(max_only.len(), 2);
    }

    #[test]
    fn unparseable_bound_counts_as_absent() {
        let students = roster();
        let params = FilterParams::from_pairs([("minAbs", "abc")]);
        assert_eq!(params.min_absents, None);
        assert_eq!(filter_students(&students, &params).len(), 2);
    }

    #[test]
    fn later_scalar_pairs_overwrite_earlier_ones() {
        let params = FilterParams::from_pairs([("q", "ann"), ("q", "ben"), ("minAbs", "1"), ("minAbs", "4")]);
        assert_eq!(params.query.as_deref(), Some("ben"));
        assert_eq!(params.min_absents, Some(4));
    }

    #[test]
    fn empty_query_and_unknown_keys_are_ignored() {
        let params = FilterParams::from_pairs([("q", ""), ("page", "2")]);
        assert!(params.query.is_none());
        assert!(params.courses.is_empty());
    }

    fn task(id: i64, title: &str, completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            completed,
            priority: Priority::Medium,
            due_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        }
    }

    #[test]
    fn task_filter_composes_status_and_search() {
        let tasks = vec![
            task(1, "Write report", false),
            task(2, "Review report", true),
            task(3, "Plan sprint", false),
        ];

        let pending = filter_tasks(&tasks, StatusFilter::Pending, "");
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].id, 1);
        assert_eq!(pending[1].id, 3);

        let completed_reports = filter_tasks(&tasks, StatusFilter::Completed, "report");
        assert_eq!(completed_reports.len(), 1);
        assert_eq!(completed_reports[0].id, 2);

        let all_reports = filter_tasks(&tasks, StatusFilter::All, "REPORT");
        assert_eq!(all_reports.len(), 2);
    }
}

use crate::models::{Todo, TodoStats};

/// New todos land at the back of the list, unlike the roster's prepend.
pub fn add(todos: &[Todo], todo: Todo) -> Vec<Todo> {
    let mut next = todos.to_vec();
    next.push(todo);
    next
}

/// Flips completion on the matching todo; unknown ids leave the list as-is.
pub fn toggle_complete(todos: &[Todo], id: i64) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| {
            if todo.id == id {
                Todo {
                    is_completed: !todo.is_completed,
                    ..todo.clone()
                }
            } else {
                todo.clone()
            }
        })
        .collect()
}

pub fn remove(todos: &[Todo], id: i64) -> Vec<Todo> {
    todos.iter().filter(|todo| todo.id != id).cloned().collect()
}

pub fn stats(todos: &[Todo]) -> TodoStats {
    TodoStats {
        created: todos.len(),
        completed: todos.iter().filter(|todo| todo.is_completed).count(),
        urgent: todos.iter().filter(|todo| todo.is_urgent).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, title: &str, completed: bool, urgent: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            is_completed: completed,
            is_urgent: urgent,
        }
    }

    #[test]
    fn add_appends_at_the_back() {
        let todos = vec![todo(1, "water plants", false, false)];
        let next = add(&todos, todo(2, "file taxes", false, true));
        assert_eq!(next.len(), 2);
        assert_eq!(next[0].id, 1);
        assert_eq!(next[1].id, 2);
    }

    #[test]
    fn toggle_twice_restores_the_original() {
        let todos = vec![todo(1, "water plants", false, false)];
        let once = toggle_complete(&todos, 1);
        assert!(once[0].is_completed);
        let twice = toggle_complete(&once, 1);
        assert_eq!(twice, todos);
    }

    #[test]
    fn toggle_unknown_id_is_identity() {
        let todos = vec![todo(1, "water plants", false, false)];
        assert_eq!(toggle_complete(&todos, 99), todos);
    }

    #[test]
    fn remove_drops_only_the_matching_todo() {
        let todos = vec![
            todo(1, "water plants", false, false),
            todo(2, "file taxes", false, true),
        ];
        let next = remove(&todos, 1);
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, 2);
    }

    #[test]
    fn stats_count_created_completed_and_urgent() {
        let todos = vec![
            todo(1, "water plants", true, false),
            todo(2, "file taxes", false, true),
            todo(3, "call dentist", true, true),
        ];
        let counts = stats(&todos);
        assert_eq!(counts.created, 3);
        assert_eq!(counts.completed, 2);
        assert_eq!(counts.urgent, 2);
    }
}

use std::path::Path;

use anyhow::Context;
use uuid::Uuid;

use crate::models::Student;

/// Reads the mirror file if it exists. A missing file is not an error:
/// the roster simply starts empty, as the front end did before its first
/// local-storage write.
pub fn load_students(path: &Path) -> anyhow::Result<Option<Vec<Student>>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster mirror {}", path.display()))?;
    let students = serde_json::from_str(&raw)
        .with_context(|| format!("malformed roster mirror {}", path.display()))?;
    Ok(Some(students))
}

/// Mirrors the student list to disk. Only the list is persisted; the
/// absence total is recomputed on load.
pub fn save_students(path: &Path, students: &[Student]) -> anyhow::Result<()> {
    let raw = serde_json::to_string_pretty(students)?;
    std::fs::write(path, raw)
        .with_context(|| format!("failed to write roster mirror {}", path.display()))?;
    Ok(())
}

pub fn seed_students() -> Vec<Student> {
    vec![
        Student {
            id: Uuid::new_v4(),
            name: "Avery Lee".to_string(),
            age: 22,
            absents: 3,
            is_graduated: false,
            courses_list: vec!["Math".to_string(), "HTML".to_string()],
        },
        Student {
            id: Uuid::new_v4(),
            name: "Jules Moreno".to_string(),
            age: 24,
            absents: 1,
            is_graduated: true,
            courses_list: vec!["CSS".to_string(), "OOP".to_string()],
        },
        Student {
            id: Uuid::new_v4(),
            name: "Kiara Patel".to_string(),
            age: 21,
            absents: 0,
            is_graduated: false,
            courses_list: vec!["Math".to_string(), "OOP".to_string()],
        },
    ]
}

/// Imports students from a CSV file with the columns
/// `name,age,absents,is_graduated,courses` (courses `;`-separated).
pub fn import_csv(csv_path: &Path) -> anyhow::Result<Vec<Student>> {
    let reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    read_csv_students(reader)
}

fn read_csv_students<R: std::io::Read>(mut reader: csv::Reader<R>) -> anyhow::Result<Vec<Student>> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        name: String,
        age: i32,
        absents: i32,
        is_graduated: bool,
        courses: String,
    }

    let mut students = Vec::new();
    for result in reader.deserialize::<CsvRow>() {
        let row = result.context("invalid student row")?;
        students.push(Student {
            id: Uuid::new_v4(),
            name: row.name,
            age: row.age,
            absents: row.absents,
            is_graduated: row.is_graduated,
            courses_list: row
                .courses
                .split(';')
                .filter(|course| !course.is_empty())
                .map(|course| course.trim().to_string())
                .collect(),
        });
    }

    Ok(students)
}

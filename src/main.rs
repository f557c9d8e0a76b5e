use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use uuid::Uuid;

mod filter;
mod models;
mod report;
mod roster;
mod store;
mod todo;

use filter::FilterParams;
use models::{RosterState, Student};
use roster::{reduce, RosterAction};

#[derive(Parser)]
#[command(name = "roster-tracker")]
#[command(about = "Student roster tracker with query-driven filtering", long_about = None)]
struct Cli {
    /// Roster mirror file
    #[arg(long, global = true, default_value = "students.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write realistic seed students to the mirror
    Seed,
    /// Add a student to the front of the roster
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: i32,
        #[arg(long)]
        graduated: bool,
        #[arg(long = "course")]
        courses: Vec<String>,
    },
    /// Remove the first (newest) student
    Pop,
    /// Adjust a student's absence count
    Absent {
        #[arg(long)]
        id: Uuid,
        #[arg(long, allow_hyphen_values = true)]
        change: i32,
    },
    /// List students, optionally narrowed by filters
    List {
        #[arg(long)]
        query: Option<String>,
        /// grad | non-grad | all
        #[arg(long)]
        graduated: Option<String>,
        #[arg(long = "course")]
        courses: Vec<String>,
        #[arg(long)]
        min_abs: Option<String>,
        #[arg(long)]
        max_abs: Option<String>,
    },
    /// Import students from a CSV file
    Import {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Generate a markdown roster report
    Report {
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn load_state(data: &PathBuf) -> anyhow::Result<RosterState> {
    let students = store::load_students(data)?.unwrap_or_default();
    Ok(reduce(
        &RosterState::default(),
        RosterAction::SetInitialState(students),
    ))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Seed => {
            let students = store::seed_students();
            store::save_students(&cli.data, &students)?;
            println!("Seeded {} students into {}.", students.len(), cli.data.display());
        }
        Commands::Add {
            name,
            age,
            graduated,
            courses,
        } => {
            let state = load_state(&cli.data)?;
            let student = Student {
                id: Uuid::new_v4(),
                name,
                age,
                absents: 0,
                is_graduated: graduated,
                courses_list: courses,
            };
            let next = reduce(&state, RosterAction::AddStudent(student));
            store::save_students(&cli.data, &next.students)?;
            println!(
                "Added {}. Roster now has {} students.",
                next.students[0].name,
                next.students.len()
            );
        }
        Commands::Pop => {
            let state = load_state(&cli.data)?;
            let removed = state.students.first().map(|s| s.name.clone());
            let next = reduce(&state, RosterAction::RemoveFirst);
            store::save_students(&cli.data, &next.students)?;
            match removed {
                Some(name) => println!("Removed {name}. Total absences now {}.", next.total_absents),
                None => println!("Roster is already empty."),
            }
        }
        Commands::Absent { id, change } => {
            let state = load_state(&cli.data)?;
            if !state.students.iter().any(|s| s.id == id) {
                println!("Warning: no student with id {id}; the total still shifts.");
            }
            let next = reduce(&state, RosterAction::UpdateAbsent { id, change });
            store::save_students(&cli.data, &next.students)?;
            println!("Total absences now {}.", next.total_absents);
        }
        Commands::List {
            query,
            graduated,
            courses,
            min_abs,
            max_abs,
        } => {
            let state = load_state(&cli.data)?;

            let mut pairs: Vec<(&str, &str)> = Vec::new();
            if let Some(q) = query.as_deref() {
                pairs.push(("q", q));
            }
            if let Some(g) = graduated.as_deref() {
                pairs.push(("graduated", g));
            }
            for course in &courses {
                pairs.push(("courses", course.as_str()));
            }
            if let Some(min) = min_abs.as_deref() {
                pairs.push(("minAbs", min));
            }
            if let Some(max) = max_abs.as_deref() {
                pairs.push(("maxAbs", max));
            }

            let params = FilterParams::from_pairs(pairs);
            let filtered = filter::filter_students(&state.students, &params);

            if filtered.is_empty() {
                println!("No results found!");
                return Ok(());
            }

            println!(
                "{} of {} students (total absences {}):",
                filtered.len(),
                state.students.len(),
                state.total_absents
            );
            for student in &filtered {
                println!(
                    "- {} (age {}, {} absences{}) [{}] {}",
                    student.name,
                    student.age,
                    student.absents,
                    if student.is_graduated { ", graduated" } else { "" },
                    student.courses_list.join(", "),
                    student.id
                );
            }
        }
        Commands::Import { csv } => {
            let imported = store::import_csv(&csv)?;
            let state = load_state(&cli.data)?;
            let mut next = state;
            for student in imported.iter().cloned() {
                next = reduce(&next, RosterAction::AddStudent(student));
            }
            store::save_students(&cli.data, &next.students)?;
            println!("Imported {} students from {}.", imported.len(), csv.display());
        }
        Commands::Report { out } => {
            let state = load_state(&cli.data)?;
            let report = report::build_report(&state, Utc::now().date_naive());
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}

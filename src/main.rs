use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gradebook::{Config, Grade, JsonFile, LoadOutcome, RecordStore, Student};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Student grade records: add, list, search and delete students and their grades
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "gradebook.json")]
    config: PathBuf,

    /// Record file (overrides config file)
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Write the record file even if it could not be loaded
    #[arg(long)]
    force: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a new student
    AddStudent {
        id: i32,
        first_name: String,
        last_name: String,
    },
    /// Record a course grade for a student
    AddGrade {
        student_id: i32,
        course_code: String,
        #[arg(value_parser = clap::value_parser!(i32).range(0..=100))]
        midterm: i32,
        #[arg(value_name = "FINAL", value_parser = clap::value_parser!(i32).range(0..=100))]
        final_score: i32,
    },
    /// List all students with their grades
    List {
        /// Sort by last name, then first name
        #[arg(short, long)]
        sorted: bool,
    },
    /// Show one student's grades, highest average first
    Grades { student_id: i32 },
    /// Find students whose name contains a keyword
    Search { keyword: String },
    /// Delete a student and all of their grades
    DeleteStudent { id: i32 },
    /// Delete a student's grade for a course
    DeleteGrade {
        student_id: i32,
        course_code: String,
    },
    /// Write the records back to the data file
    Save,
}

impl Commands {
    /// Whether the command ends by writing the record file.
    fn writes(&self) -> bool {
        !matches!(
            self,
            Commands::List { .. } | Commands::Grades { .. } | Commands::Search { .. }
        )
    }
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    if let Some(data_file) = cli.data_file {
        config.data_file = data_file;
    }

    let file = JsonFile::new(&config.data_file);
    let (mut store, outcome) = RecordStore::open(config.store.clone(), &file);
    match outcome {
        Ok(LoadOutcome::Loaded(count)) => println!("[load] {} student record(s) loaded.", count),
        Ok(LoadOutcome::Absent) => {}
        // An unloadable file must not be replaced by the empty store.
        Err(e) if cli.command.writes() && !cli.force => {
            return Err(format!(
                "{e}; refusing to overwrite {} (pass --force to replace it)",
                config.data_file.display()
            )
            .into());
        }
        Err(_) => {}
    }

    let mutated = match cli.command {
        Commands::AddStudent {
            id,
            first_name,
            last_name,
        } => {
            let student = store.add_student(id, first_name, last_name)?;
            println!("Student {} added.", student.full_name());
            true
        }
        Commands::AddGrade {
            student_id,
            course_code,
            midterm,
            final_score,
        } => {
            let grade = store.add_grade(student_id, course_code, midterm, final_score)?;
            println!(
                "Grade recorded: {} (average {:.2}, {})",
                grade.course_code(),
                grade.average(),
                grade.pass_status()
            );
            true
        }
        Commands::List { sorted } => {
            print_students(&store.list_students(sorted));
            false
        }
        Commands::Grades { student_id } => {
            let grades = store.student_grades(student_id)?;
            if let Some(student) = store.get_student(student_id) {
                print_grade_table(student, &grades);
            }
            false
        }
        Commands::Search { keyword } => {
            let results = store.search_students(&keyword);
            if results.is_empty() {
                println!("No student matches '{}'.", keyword);
            } else {
                println!("--- Search results ('{}') ---", keyword);
                for student in results {
                    println!("ID: {}, Name: {}", student.student_id(), student.full_name());
                }
            }
            false
        }
        Commands::DeleteStudent { id } => {
            let removed = store.delete_student(id)?;
            println!("Student {} ({}) deleted.", id, removed.full_name());
            true
        }
        Commands::DeleteGrade {
            student_id,
            course_code,
        } => {
            store.delete_grade(student_id, &course_code)?;
            println!("Grade for {} deleted from student {}.", course_code, student_id);
            true
        }
        Commands::Save => true,
    };

    if mutated {
        store.save_to(&file)?;
        println!("[save] Records written to {}.", config.data_file.display());
    }
    Ok(())
}

// ============================================================================
// Rendering
// ============================================================================

fn print_students(students: &[&Student]) {
    if students.is_empty() {
        println!("No students recorded.");
        return;
    }

    for student in students {
        println!("ID: {}, Name: {}", student.student_id(), student.full_name());
        let grades = student.grades_by_average();
        if !grades.is_empty() {
            println!("  Grades:");
            for grade in grades {
                println!(
                    "    - {}: midterm={}, final={}, average={:.2}, status: {}",
                    grade.course_code(),
                    grade.midterm_score(),
                    grade.final_score(),
                    grade.average(),
                    grade.pass_status()
                );
            }
        }
    }
}

fn print_grade_table(student: &Student, grades: &[&Grade]) {
    println!("================================================");
    println!("{} - {} grade report", student.student_id(), student.full_name());
    println!("================================================");

    if grades.is_empty() {
        println!("No grades recorded for this student yet.");
        println!("================================================");
        return;
    }

    println!(
        "| {:<10} | {:<7} | {:<5} | {:<10} | {:<6} |",
        "COURSE", "MIDTERM", "FINAL", "AVERAGE", "STATUS"
    );
    println!("|------------|---------|-------|------------|--------|");
    for grade in grades {
        println!(
            "| {:<10} | {:<7} | {:<5} | {:<10.2} | {:<6} |",
            grade.course_code(),
            grade.midterm_score(),
            grade.final_score(),
            grade.average(),
            grade.pass_status().as_str()
        );
    }
    println!("================================================");
}

// ============================================================================
// Initialization
// ============================================================================

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gradebook=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

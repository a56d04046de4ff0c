use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

mod cli;
mod config;

use cli::Cli;
use cli::commands::{Commands, ContactCommands};
use config::Config;

use taskdeck::contacts::{ActionOutcome, Contact, ContactAction, ContactBook};
use taskdeck::store::{NewTask, Task, TaskPatch, TaskStore};
use taskdeck::transfer::{EXPORT_FILENAME, export_csv, import_csv};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskdeck")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("taskdeck.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let mut store =
        TaskStore::open(&config.resolve_db_path()).context("Failed to open task store")?;

    match &cli.command {
        None => handle_list(&store, false),
        Some(Commands::Add { text, teacher, subject }) => {
            handle_add(&store, text, teacher.as_deref(), subject.as_deref())
        }
        Some(Commands::List { json }) => handle_list(&store, *json),
        Some(Commands::Edit { id, text, teacher, subject }) => handle_edit(
            &store,
            *id,
            text.clone(),
            teacher.clone(),
            subject.clone(),
        ),
        Some(Commands::Toggle { id }) => handle_toggle(&store, *id),
        Some(Commands::Delete { id }) => handle_delete(&store, *id),
        Some(Commands::Export { output }) => handle_export(&store, output.as_deref()),
        Some(Commands::Import { file }) => handle_import(&mut store, file),
        Some(Commands::Contacts { command }) => handle_contacts(command, &config.contacts_file),
    }
}

fn handle_add(store: &TaskStore, text: &str, teacher: Option<&str>, subject: Option<&str>) -> Result<()> {
    let fields = NewTask {
        text: text.to_string(),
        teacher: teacher.unwrap_or_default().to_string(),
        subject: subject.unwrap_or_default().to_string(),
    };
    match store.create(fields)? {
        Some(task) => {
            info!("Created task {}", task.id);
            println!("{} [{}] {}", "Added:".green(), task.id, task.text);
        }
        // Blank text is silently ignored, matching the form behavior.
        None => info!("Ignored blank task submission"),
    }
    Ok(())
}

fn handle_list(store: &TaskStore, json: bool) -> Result<()> {
    let tasks = store.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("{}", "No tasks.".yellow());
        return Ok(());
    }

    for task in &tasks {
        print_task(task);
    }
    Ok(())
}

fn print_task(task: &Task) {
    let mark = if task.done { "x".green() } else { " ".normal() };
    let mut line = format!("[{}] {:>4}  {}", mark, task.id, task.text);
    if !task.teacher.is_empty() {
        line.push_str(&format!("  ({} / {})", task.teacher, task.subject));
    }
    println!("{}", line);
}

fn handle_edit(
    store: &TaskStore,
    id: i64,
    text: Option<String>,
    teacher: Option<String>,
    subject: Option<String>,
) -> Result<()> {
    let patch = TaskPatch { text, teacher, subject };
    let task = store.update(id, patch)?;
    info!("Updated task {}", id);
    println!("{} [{}] {}", "Updated:".green(), task.id, task.text);
    Ok(())
}

fn handle_toggle(store: &TaskStore, id: i64) -> Result<()> {
    // Quiet on success, like the 204 the web toggle returned.
    let task = store.toggle(id)?;
    info!("Toggled task {} -> done={}", id, task.done);
    Ok(())
}

fn handle_delete(store: &TaskStore, id: i64) -> Result<()> {
    store.delete(id)?;
    info!("Deleted task {}", id);
    println!("{} {}", "Deleted task".red(), id);
    Ok(())
}

fn handle_export(store: &TaskStore, output: Option<&Path>) -> Result<()> {
    let tasks = store.list()?;
    let csv_text = export_csv(&tasks)?;
    let path = output.unwrap_or(Path::new(EXPORT_FILENAME));
    fs::write(path, csv_text).context("Failed to write export file")?;
    println!("{} {} tasks to {}", "Exported".green(), tasks.len(), path.display());
    Ok(())
}

fn handle_import(store: &mut TaskStore, file: &Path) -> Result<()> {
    let bytes = fs::read(file).context(format!("Failed to read {}", file.display()))?;
    let count = import_csv(store, &bytes)?;
    println!("{} {} tasks from {}", "Imported".green(), count, file.display());
    Ok(())
}

fn handle_contacts(command: &ContactCommands, contacts_file: &Path) -> Result<()> {
    let mut book = ContactBook::load(contacts_file).context("Failed to load contact book")?;

    let action = match command {
        ContactCommands::List => {
            print_contacts(book.contacts());
            return Ok(());
        }
        ContactCommands::Search { date } => {
            let hits = book.search_by_date(date);
            if hits.is_empty() {
                println!("No teachers found for the date {}.", date);
            } else {
                for contact in hits {
                    print_contact(contact);
                }
            }
            return Ok(());
        }
        ContactCommands::Add { teacher1, teacher2, date, subject } => ContactAction::Add {
            teacher_1: teacher1.clone(),
            teacher_2: teacher2.clone(),
            date: date.clone(),
            subject: subject.clone(),
        },
        ContactCommands::Update { id, teacher1, teacher2, date, subject } => ContactAction::Update {
            id: id.clone(),
            teacher_1: teacher1.clone(),
            teacher_2: teacher2.clone(),
            date: date.clone(),
            subject: subject.clone(),
        },
        ContactCommands::Remarks { id, remarks } => ContactAction::SetRemarks {
            id: id.clone(),
            remarks: remarks.clone(),
        },
        ContactCommands::Delete { id } => ContactAction::Delete { id: id.clone() },
    };

    match book.apply(action) {
        ActionOutcome::NotFound(id) => {
            // A miss is a message, not an error; the book is unchanged.
            println!("{}", format!("Teacher's ID '{}' is not found.", id).red());
        }
        outcome => {
            book.save(contacts_file).context("Failed to save contact book")?;
            match outcome {
                ActionOutcome::Added(id) => {
                    println!("{} contact with ID {}", "Added".green(), id);
                }
                ActionOutcome::Updated(id) => {
                    println!("{} contact with ID {}", "Updated".green(), id);
                }
                ActionOutcome::Deleted(id) => {
                    println!("{} contact with ID {} (remaining IDs renumbered)", "Deleted".red(), id);
                }
                ActionOutcome::NotFound(_) => unreachable!(),
            }
        }
    }
    Ok(())
}

fn print_contacts(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("{}", "No contacts.".yellow());
        return;
    }
    println!(
        "{:<6} {:<15} {:<15} {:<12} {:<20} {}",
        "ID", "Teacher_1", "Teacher_2", "Date", "Subject", "Remarks"
    );
    for contact in contacts {
        print_contact(contact);
    }
}

fn print_contact(contact: &Contact) {
    println!(
        "{:<6} {:<15} {:<15} {:<12} {:<20} {}",
        contact.id, contact.teacher_1, contact.teacher_2, contact.date, contact.subject, contact.remarks
    );
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}

// src/cli.rs
// Console frontends for the two binaries. All interactive input lives here.
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use chrono::Local;
use clap::{CommandFactory, Parser, ValueEnum};

use crate::{
    aggregate::TopicRow,
    config::options::TrackerOptions,
    credentials::{self, CookieBundle, CredentialStore, KeyringStore, parse_cookie_line},
    error::{Gap, TrackerError},
    progress::Progress,
    runner, schedule,
};

/* ---------------- tracker ---------------- */

#[derive(Debug, Parser)]
#[command(name = "tracker", about = "Web Security Academy progress tracker")]
pub struct TrackerArgs {
    /// Update the progress table once
    #[arg(long)]
    pub update: bool,

    /// Run the update every Monday at 09:00, forever (ignored with --update)
    #[arg(long)]
    pub schedule: bool,
}

/// Prints each step and gap to the console.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn page_done(&mut self, name: &str) {
        println!("Fetched {name}");
    }
    fn topic_done(&mut self, row: &TopicRow) {
        println!("  {} {}/{}", row.title, row.completed, row.total_labs);
    }
    fn gap(&mut self, gap: &Gap) {
        eprintln!("Warning: {gap}");
    }
}

pub fn run_tracker() -> color_eyre::Result<ExitCode> {
    let args = TrackerArgs::parse();
    if !args.update && !args.schedule {
        TrackerArgs::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    }

    let options = TrackerOptions::default();
    crate::log::init(&options.log_file)?;

    let creds = match CredentialStore::open(KeyringStore::default(), prompt_username) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Could not open the secret store: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    // Startup validation is the one failure that ends the process non-zero.
    let session = match runner::init_session(&creds) {
        Ok(s) => s,
        Err(e) => {
            explain_session_error(&e);
            return Ok(ExitCode::FAILURE);
        }
    };

    if args.update {
        update_once(&session, &options);
    } else {
        drop(session);
        schedule::run_forever(schedule::Weekly::default(), schedule::default_tick(), || {
            println!("Running scheduled update at {}", Local::now());
            // Re-validate each time; cookies may have expired since last week.
            match runner::init_session(&creds) {
                Ok(session) => update_once(&session, &options),
                Err(e) => {
                    loge!("scheduled update skipped: {e}");
                    println!("Failed to update progress: invalid session");
                }
            }
        });
    }
    Ok(ExitCode::SUCCESS)
}

fn update_once(session: &crate::core::net::Session, options: &TrackerOptions) {
    match runner::update(session, options, &mut ConsoleProgress) {
        Ok(summary) => println!(
            "Updated {} topics ({} warnings) → {}, {}",
            summary.topics,
            summary.gaps,
            summary.report_file.display(),
            summary.progress_file.display()
        ),
        Err(e) => {
            loge!("update failed: {e}");
            eprintln!("Update failed: {e}");
        }
    }
}

fn explain_session_error(e: &TrackerError) {
    match e {
        TrackerError::NoCredentials => {
            println!("No stored cookies found.");
            println!("Please run 'cookies store' to store your cookies first.");
        }
        TrackerError::InvalidSession => {
            println!("Stored cookies are invalid or expired.");
            println!("Please run 'cookies store' to update your cookies.");
        }
        other => eprintln!("Could not initialize session: {other}"),
    }
}

/* ---------------- cookies ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CookieCommand {
    Store,
    Get,
    Delete,
    Validate,
}

#[derive(Debug, Parser)]
#[command(name = "cookies", about = "Manage stored Web Security Academy cookies")]
pub struct CookieArgs {
    #[arg(value_enum, ignore_case = true)]
    pub command: CookieCommand,
}

pub fn run_cookies() -> color_eyre::Result<ExitCode> {
    let args = CookieArgs::parse();
    crate::log::init(&TrackerOptions::default().log_file)?;

    match args.command {
        CookieCommand::Store => {
            let stdin = io::stdin();
            let Some(bundle) = read_cookie_input(&mut stdin.lock())? else {
                return Ok(ExitCode::SUCCESS);
            };
            if !credentials::validate(&bundle) {
                println!("Cookie validation failed! These cookies may be invalid or expired.");
                return Ok(ExitCode::SUCCESS);
            }
            match open_store().and_then(|c| c.set(&bundle)) {
                Ok(()) => println!("Cookies stored successfully!"),
                Err(e) => println!("Error storing cookies: {e}"),
            }
        }
        CookieCommand::Get => match open_store().ok().and_then(|c| c.get()) {
            Some(bundle) => {
                println!("\nStored cookies:");
                for (name, value) in bundle.iter() {
                    println!("{name}={value}");
                }
            }
            None => println!("No cookies found."),
        },
        CookieCommand::Delete => match open_store().and_then(|c| c.delete()) {
            Ok(()) => println!("Cookies deleted successfully!"),
            Err(e) => println!("Error deleting cookies: {e}"),
        },
        CookieCommand::Validate => match open_store().ok().and_then(|c| c.get()) {
            Some(bundle) if credentials::validate(&bundle) => println!("Cookies are valid!"),
            Some(_) => println!("Cookies are invalid or expired!"),
            None => println!("No cookies found."),
        },
    }
    Ok(ExitCode::SUCCESS)
}

fn open_store() -> crate::error::Result<CredentialStore<KeyringStore>> {
    CredentialStore::open(KeyringStore::default(), prompt_username).inspect_err(|e| {
        println!("Could not open the secret store: {e}");
    })
}

fn prompt_username() -> io::Result<String> {
    print!("Enter your PortSwigger Academy email: ");
    io::stdout().flush()?;
    let mut line = s!();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

/// Read `name=value` lines until a blank line (or EOF), then check the required
/// cookies are there. `None` means the input was rejected; the reason is printed.
pub fn read_cookie_input<R: BufRead>(input: &mut R) -> io::Result<Option<CookieBundle>> {
    println!("\nEnter your PortSwigger cookies:");
    println!("Required cookies: Authenticated_UserVerificationId, SessionId, t");
    println!("Enter each cookie one at a time in 'name=value' format (press Enter twice when done):");

    let mut bundle = CookieBundle::new();
    let mut line = s!();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        match parse_cookie_line(trimmed) {
            Some((name, value)) => bundle.insert(name, value),
            None => println!("Invalid format. Use 'name=value'"),
        }
    }

    let missing = bundle.missing_required();
    if !missing.is_empty() {
        println!("Missing required cookies: {}", missing.join(", "));
        return Ok(None);
    }
    Ok(Some(bundle))
}

use std::path::PathBuf;

use project_night::meetup::{MeetupClient, MeetupConfig};
use project_night::ops::roster_ops;
use project_night::store::{RosterLayout, RosterStore};

enum Mode {
    Grouper,
    SecurityList(Option<String>),
}

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();
    project_night::logging::init_tracing();

    let mut args = std::env::args().skip(1).peekable();
    let mut roster_path: Option<PathBuf> = None;
    let mut mode = Mode::Grouper;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--roster" | "-r" => {
                roster_path = args.next().map(PathBuf::from);
                if roster_path.is_none() {
                    eprintln!("Error: --roster requires a CSV path");
                    std::process::exit(1);
                }
            }
            "--security-list" | "-s" => {
                let event_id = match args.peek() {
                    Some(next) if !next.starts_with('-') => args.next(),
                    _ => None,
                };
                mode = Mode::SecurityList(event_id);
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    match mode {
        Mode::Grouper => {
            let mut roster = RosterStore::new();
            if let Some(path) = roster_path {
                let arg = path.display().to_string();
                match roster_ops::bulk_add(&mut roster, &arg, RosterLayout::Plain) {
                    Ok(count) => println!("Loaded {} participants from {}.", count, arg),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            project_night::cli::run(roster);
        }
        Mode::SecurityList(event_id) => {
            let config = match MeetupConfig::from_env() {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };
            let client = MeetupClient::new(config);
            let outcome =
                project_night::cli::security_commands::run(&client, event_id.as_deref());
            if let Err(e) = outcome {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Project Night - team grouping and door lists");
    println!();
    println!("Usage: project_night [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -r, --roster <CSV>             Preload participants (Name,Experience Score)");
    println!("  -s, --security-list [EVENT_ID] Write the RSVP door list for an event");
    println!("  -h, --help                     Show this help");
    println!();
    println!("Environment:");
    println!("  MEETUP_API_KEY   API key for the event platform (required for --security-list)");
    println!("  MEETUP_API_ROOT  API root (default https://api.meetup.com)");
    println!("  MEETUP_GROUP     Group url name (default _ChiPy_)");
    println!("  RUST_LOG         Log filter, logs go to stderr (default warn)");
}

pub mod context;
pub mod roster_commands;
pub mod group_commands;
pub mod security_commands;

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::error::{ProjectNightError, ProjectNightResult};
use crate::store::{RosterLayout, RosterStore};
use context::CLIContext;

const PROMPT: &str = "> ";

/// A roster command recognised by its leading words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    BulkAdd,
    GoogleAdd,
    Clear,
    Group,
    List,
    Remove,
    Save,
}

/// Prefixes are matched case-insensitively; the trailing space on some of
/// them is part of the match.
pub const COMMANDS: [(&str, Command); 8] = [
    ("add ", Command::Add),
    ("bulk add ", Command::BulkAdd),
    ("google add ", Command::GoogleAdd),
    ("clear", Command::Clear),
    ("group", Command::Group),
    ("list", Command::List),
    ("remove ", Command::Remove),
    ("save", Command::Save),
];

/// Run the interactive roster REPL until end of input.
pub fn run(roster: RosterStore) {
    println!("Project Night grouper");
    println!("Commands: {}. Ctrl-D to quit.", command_names());
    println!();

    if let Err(e) = ctrlc::set_handler(|| {
        print!("{}", context::interrupt_echo());
        io::stdout().flush().ok();
    }) {
        warn!(error = %e, "could not install Ctrl-C handler");
    }

    let mut ctx = CLIContext::new(roster);
    repl_loop(&mut ctx);
    println!("GoodBye!");
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line(PROMPT) {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        dispatch(ctx, input);
    }
}

/// Route one line of input to its command. Errors are printed, never raised.
pub fn dispatch(ctx: &mut CLIContext, input: &str) {
    let (command, args) = match parse_command(input) {
        Ok(parsed) => parsed,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };
    debug!(?command, args, "dispatch");

    match command {
        Command::Add => roster_commands::add(ctx, args),
        Command::BulkAdd => roster_commands::bulk_add(ctx, args, RosterLayout::Plain),
        Command::GoogleAdd => roster_commands::bulk_add(ctx, args, RosterLayout::GoogleForm),
        Command::Clear => roster_commands::clear(ctx),
        Command::Group => group_commands::group(ctx, args),
        Command::List => roster_commands::list(ctx),
        Command::Remove => roster_commands::remove(ctx, args),
        Command::Save => roster_commands::save(ctx, args),
    }
}

/// Split input into the longest matching command prefix and its trimmed
/// remainder. The remainder keeps its original case.
pub fn parse_command(input: &str) -> ProjectNightResult<(Command, &str)> {
    let input = input.trim();
    let matched = COMMANDS
        .iter()
        .filter(|(prefix, _)| {
            input
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
        .max_by_key(|(prefix, _)| prefix.len());

    match matched {
        Some((prefix, command)) => Ok((*command, input[prefix.len()..].trim())),
        None => Err(ProjectNightError::UnknownCommand {
            input: input.to_string(),
            valid: command_names(),
        }),
    }
}

fn command_names() -> String {
    COMMANDS
        .iter()
        .map(|(prefix, _)| prefix.trim())
        .collect::<Vec<_>>()
        .join(", ")
}

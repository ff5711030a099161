use crate::cli::context::CLIContext;
use crate::error::ProjectNightError;
use crate::ops::roster_ops::{self, ClearDecision};
use crate::store::RosterLayout;

pub fn add(ctx: &mut CLIContext, args: &str) {
    match roster_ops::add_participant(&mut ctx.roster, args) {
        Ok(p) => println!("{} added.", p.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn bulk_add(ctx: &mut CLIContext, args: &str, layout: RosterLayout) {
    match roster_ops::bulk_add(&mut ctx.roster, args, layout) {
        Ok(count) => println!("{} participants from {} added.", count, args),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn clear(ctx: &mut CLIContext) {
    let answer = match ctx.prompt("Are you sure you want to remove all participants? ") {
        Some(s) => s,
        None => return,
    };
    match roster_ops::clear_participants(&mut ctx.roster, &answer) {
        ClearDecision::Cleared => println!("Aaaall gone."),
        ClearDecision::Kept => println!("Ok - we didn't touch anything."),
        ClearDecision::Invalid(answer) => println!("'{}' is not a valid command.", answer),
    }
}

pub fn list(ctx: &CLIContext) {
    let participants = ctx.roster.list();
    if participants.is_empty() {
        println!("No participants yet. Use 'add <name>, <score>' to add someone.");
        return;
    }

    let width = participants
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());
    println!("Participants ({}):", participants.len());
    println!("  {:<width$}  Experience Score", "Name", width = width);
    for p in participants {
        println!("  {:<width$}  {}", p.name, p.experience_score, width = width);
    }
}

pub fn remove(ctx: &mut CLIContext, args: &str) {
    match roster_ops::remove_participants(&mut ctx.roster, args) {
        Ok(outcome) => {
            println!("{} removed.", outcome.removed.join(", "));
            if !outcome.not_found.is_empty() {
                println!("Not on the roster: {}", outcome.not_found.join(", "));
            }
        }
        Err(e @ ProjectNightError::NotFound { .. }) => println!("{}", e),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn save(ctx: &CLIContext, args: &str) {
    match roster_ops::save_participants(&ctx.roster, args) {
        Ok(path) => println!("Participants saved to {}.", path.display()),
        Err(ProjectNightError::Io(e)) => println!("Please enter a valid path name. ({})", e),
        Err(e) => ctx.print_error(&e),
    }
}

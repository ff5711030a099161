use crate::cli::context::CLIContext;
use crate::ops::group_ops;
use crate::validation;

/// `group [size]`: print balanced teams for the current roster.
pub fn group(ctx: &CLIContext, args: &str) {
    let group_size = match validation::group_size(args) {
        Ok(n) => n,
        Err(e) => {
            ctx.print_error(&e);
            println!("Usage: group [<integer group size>]");
            return;
        }
    };

    let mut rng = rand::rng();
    match group_ops::create_groups(ctx.roster.list(), group_size, &mut rng) {
        Ok(groups) if groups.is_empty() => {
            println!("No participants to group. Add some first.");
        }
        Ok(groups) => {
            for group in &groups {
                println!("{}: {}", group.label, group.members.join(", "));
            }
        }
        Err(e) => ctx.print_error(&e),
    }
}

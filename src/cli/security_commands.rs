use tracing::info;

use crate::cli::context;
use crate::error::{ProjectNightError, ProjectNightResult};
use crate::meetup::attendees;
use crate::meetup::EventApi;
use crate::model::EventSummary;
use crate::ops::security_list_ops;
use crate::store::security_list_file;

/// Pull the RSVPs for one event and write its door list next to the
/// working directory. Without an `event_id` the user picks from the list
/// of upcoming events.
pub fn run(api: &dyn EventApi, event_id: Option<&str>) -> ProjectNightResult<()> {
    let events = attendees::upcoming_events(api)?;
    if events.is_empty() {
        println!("No upcoming events found.");
        return Ok(());
    }
    print_events(&events);

    let event = match event_id {
        Some(id) => resolve_event(&events, id)?,
        None => match select_event(&events) {
            Some(event) => event,
            None => return Ok(()),
        },
    };

    let records = attendees::fetch_attendees(api, &event.id)?;
    let entries = security_list_ops::security_list(&records);

    let path = security_list_file::file_name_for(event);
    security_list_file::save(&path, &entries)?;
    info!(event = %event.id, "security list complete");
    println!("Wrote {} names to {}.", entries.len(), path.display());
    Ok(())
}

fn print_events(events: &[EventSummary]) {
    let id_width = events
        .iter()
        .map(|e| e.id.as_str().len())
        .max()
        .unwrap_or(0)
        .max(2);
    println!("{:<id_width$}  {:<19}  Name", "id", "time", id_width = id_width);
    for e in events {
        println!(
            "{:<id_width$}  {:<19}  {}  {}",
            e.id.as_str(),
            e.time,
            e.name,
            e.link,
            id_width = id_width
        );
    }
    println!();
}

/// Find the event with exactly this id among the listed ones.
pub fn resolve_event<'a>(
    events: &'a [EventSummary],
    id: &str,
) -> ProjectNightResult<&'a EventSummary> {
    let id = id.trim();
    events.iter().find(|e| e.id.as_str() == id).ok_or_else(|| {
        let valid: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        ProjectNightError::InvalidArgument(format!(
            "The following option isn't valid: {}. Please select from [{}]. \
             Selections should NOT be enclosed in quotes.",
            id,
            valid.join(", ")
        ))
    })
}

fn select_event(events: &[EventSummary]) -> Option<&EventSummary> {
    loop {
        let input = context::read_line(
            "Select the event id from which you want attendees from the above table: ",
        )?;
        match resolve_event(events, &input) {
            Ok(event) => return Some(event),
            Err(e) => println!("{}", e),
        }
    }
}

pub mod csv_file;
pub mod roster_store;
pub mod roster_file;
pub mod security_list_file;

pub use roster_store::{RemoveOutcome, RosterStore};
pub use roster_file::RosterLayout;

pub mod error;
pub mod validation;
pub mod natural_sort;
pub mod model;
pub mod store;
pub mod ops;
pub mod meetup;
pub mod logging;
pub mod cli;

//! Widgets for the search screen

mod query_input;
mod results_list;

pub use query_input::QueryInput;
pub use results_list::ResultsList;

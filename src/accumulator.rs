#[path = "accumulator/state.rs"]
mod state;

#[path = "accumulator/ticket.rs"]
mod ticket;


pub use state::{FeedAccumulator, MergeStats};
pub use ticket::{MergeOutcome, PageTicket};

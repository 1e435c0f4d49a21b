// Chat responder
// Orchestrates preprocessing, crisis detection, scoring and response choice

mod pipeline;
mod types;

pub use pipeline::{Knowledge, Responder};
pub use types::{ChatRequest, ChatResponse, NO_BUCKET_LABEL};

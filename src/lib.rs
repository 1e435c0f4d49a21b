// Solace - Rule-based mental-health support responder
// Library exports

// Chat pipeline
pub mod buckets;
pub mod content;
pub mod crisis;
pub mod random;
pub mod responder;
pub mod text;

// Service plumbing
pub mod config;
pub mod errors;
pub mod metrics;
pub mod server;

// Offline data preparation (CLI only)
pub mod prep;

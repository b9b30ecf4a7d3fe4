// Sentiment aggregation domain
pub mod sentiment;

// Port interfaces
pub mod ports;

// Input validation
pub mod validation;

// Domain-specific error types
pub mod errors;

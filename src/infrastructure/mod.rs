// Record suppliers
pub mod demo;
pub mod replay;

// Reference data
pub mod reference;

// Service wiring
pub mod factory;

// Metrics
pub mod observability;

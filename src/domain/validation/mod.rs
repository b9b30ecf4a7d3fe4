// Input validation at the service boundary
pub mod ticker;

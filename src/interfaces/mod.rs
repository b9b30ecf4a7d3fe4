pub mod http;
pub mod view_models;

// Display-ready projections of analysis results
pub mod report_view_model;

pub use report_view_model::ReportViewModel;

//! Aggregation and batch services.

pub mod batch;
pub mod companies;

pub use batch::{merge_locations, BatchCompanyService, BatchReport, LocationOutput, EUROPE_TECH_HUBS};
pub use companies::CompaniesService;

//! Domain types for summit and company search.

pub mod company;
pub mod results;
pub mod summit;
pub mod time_interval;
mod trim;

pub use company::{Company, CompanyField, CompanyScale};
pub use results::{CompaniesInput, CompaniesOutput, SummitCompanies, SummitsInput, SummitsOutput};
pub use summit::Summit;
pub use time_interval::TimeInterval;

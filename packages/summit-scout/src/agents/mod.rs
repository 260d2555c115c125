//! Search steps: grounded generation followed by structuring.

pub mod companies;
pub mod prompts;
pub mod structurize;
pub mod summits;

pub use companies::CompanySearch;
pub use structurize::Structurizer;
pub use summits::SummitSearch;

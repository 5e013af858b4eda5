//! Portfolio records served by the API.

mod highlight;
mod personal_value;
mod subject;

pub use highlight::HighlightDto;
pub use personal_value::PersonalValueDto;
pub use subject::{PortfolioRecords, SubjectId};

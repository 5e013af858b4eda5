pub mod header;
pub mod response;

pub use header::PortfolioHeader;
pub use response::ResponseEntity;

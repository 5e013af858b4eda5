use axum::http::{HeaderName, HeaderValue};
use strum_macros::{Display, EnumIter};

/// Marker headers attached to portfolio responses.
///
/// `Display` yields the canonical spelling (`Highlights`); on the wire the name
/// is lowercased like every `http` header name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum PortfolioHeader {
    Highlights,
    Values,
}

impl PortfolioHeader {
    pub const VALUE: &'static str = "value";

    pub fn name(self) -> HeaderName {
        match self {
            PortfolioHeader::Highlights => HeaderName::from_static("highlights"),
            PortfolioHeader::Values => HeaderName::from_static("values"),
        }
    }

    pub fn value(self) -> HeaderValue {
        HeaderValue::from_static(Self::VALUE)
    }
}

mod builder;
mod container;
mod extractor;
mod injectable;

pub use builder::ContainerBuilder;
pub use container::Container;
pub use extractor::{HasContainer, Inject, Resolvable};
pub use injectable::Injectable;

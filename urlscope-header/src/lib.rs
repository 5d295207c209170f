mod header;
mod list;

pub use header::{DEFAULT_SEPARATOR, Header, HeaderDefinition};
pub use list::HeaderList;
pub use urlscope_core::Property;

mod resolver;
mod writer;

pub use resolver::{resolve_name, FocusReport, FocusResolver, NO_FOCUS};
pub use writer::write_result;

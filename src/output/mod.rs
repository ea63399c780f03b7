// Output formatting — terminal display and JSON summary export.

pub mod json;
pub mod terminal;

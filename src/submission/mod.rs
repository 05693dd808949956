pub mod collection;
pub mod envelope;
pub mod parser;

pub use collection::{resolve_params, GradeableCollection};
pub use envelope::{decode, Gradeables, SUPPORTED_API_VERSION};

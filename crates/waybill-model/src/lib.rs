pub mod error;
pub mod mapping;
pub mod platform;
pub mod schema;
pub mod summary;
pub mod table;

pub use error::{ModelError, Result};
pub use mapping::FieldMapping;
pub use platform::Platform;
pub use schema::TargetSchema;
pub use summary::FileSummary;
pub use table::Table;

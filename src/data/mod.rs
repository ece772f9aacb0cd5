pub mod connectors;
pub mod dates;

pub use connectors::{CsvConnector, DataPreview, DataValidator, RequiredColumn};
pub use dates::parse_date;

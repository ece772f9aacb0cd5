mod csv;
mod types;
mod validator;

pub use csv::CsvConnector;
pub use types::{
    DataPreview,
    RequiredColumn,
};
pub use validator::DataValidator;

pub mod linear;

pub use linear::{FittedModel, LinearRegression};

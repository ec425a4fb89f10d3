//! Parameterized statements and their bind values.

mod params;
mod statement;
pub use params::SqlValue;
pub use statement::Statement;

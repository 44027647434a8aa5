//! # Storage Module
//!
//! Storage abstraction traits plus the CSV-file implementation used by the
//! desktop app.

pub mod csv;
pub mod traits;

pub use self::csv::{ClientRepository, CsvConnection};
pub use traits::ClientStorage;

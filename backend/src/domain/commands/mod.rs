//! Command and result types passed between the UI layer and domain services.

pub mod clients;

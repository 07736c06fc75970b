//! SQL operations, one module per resource

pub mod analytics;
pub mod leads;
pub mod products;

//! Custom-apparel order aggregate and the pure logic derived from it.

pub mod aggregate;
pub mod pricing;
pub mod projection;

pub use aggregate::{
    FitPreferences, KameezMeasurements, OrderRecord, Product, ShalwarMeasurements, StretchData,
};

//! Feature access for prediction.

mod accessor;

pub use accessor::SampleAccessor;

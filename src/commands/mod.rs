//! Command implementations

mod calc;
mod holidays;
mod serve;

pub use calc::calc;
pub use holidays::holidays;
pub use serve::serve;

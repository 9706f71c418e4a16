pub mod flatten;
pub mod output;

pub use flatten::*;
pub use output::*;

pub mod names;
pub mod registry;
pub mod types;
pub mod validator;

pub use names::*;
pub use registry::*;
pub use types::*;
pub use validator::*;

pub mod shutdown;
pub mod types;

pub use shutdown::*;
pub use types::errors;
pub use types::*;

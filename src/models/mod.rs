pub mod alert;
pub mod enums;

pub use alert::*;
pub use enums::*;

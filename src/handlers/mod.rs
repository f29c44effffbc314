pub mod classify;
pub mod health;
pub mod upload;

pub use classify::*;
pub use health::*;
pub use upload::*;

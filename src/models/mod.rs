pub mod error;
pub mod health;
pub mod item;
pub mod message;
pub mod search;

pub use error::*;
pub use health::*;
pub use item::*;
pub use message::*;
pub use search::*;

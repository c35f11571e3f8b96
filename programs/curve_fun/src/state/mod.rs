pub mod nft;
pub mod platform;
pub mod pool;
pub mod user;

pub use nft::*;
pub use platform::*;
pub use pool::*;
pub use user::*;

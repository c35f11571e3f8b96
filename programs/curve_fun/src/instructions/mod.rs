pub mod buy_nft;
pub mod create_nft;
pub mod create_pool;
pub mod create_user;
pub mod init_platform;
pub mod migrate_to_tensor;
pub mod trade_token;

pub use buy_nft::*;
pub use create_nft::*;
pub use create_pool::*;
pub use create_user::*;
pub use init_platform::*;
pub use migrate_to_tensor::*;
pub use trade_token::*;

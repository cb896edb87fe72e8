pub mod handlers;

pub use handlers::campaigns::*;
pub use handlers::health::*;
pub use handlers::leaderboard::*;
pub use handlers::market::*;
pub use handlers::submissions::*;
pub use handlers::wallets::*;

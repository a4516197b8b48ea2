pub mod claim;
pub mod claim_auto;
pub mod deposit;
pub mod force_draw;
pub mod fund_prize_pool;
pub mod init_config;
pub mod request_draw;
pub mod set_stop;
pub mod start_round;
pub mod transfer_admin;
pub mod vrf_callback;
pub mod withdraw;

pub use claim::*;
pub use claim_auto::*;
pub use deposit::*;
pub use force_draw::*;
pub use fund_prize_pool::*;
pub use init_config::*;
pub use request_draw::*;
pub use set_stop::*;
pub use start_round::*;
pub use transfer_admin::*;
pub use vrf_callback::*;
pub use withdraw::*;

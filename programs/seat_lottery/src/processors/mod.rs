pub mod admin_config;
pub mod claims;
pub mod custody;
pub mod deposits;
pub mod draw;
pub mod refunds;
pub mod round_lifecycle;
pub mod vrf;

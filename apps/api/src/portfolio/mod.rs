// Portfolio record management.
// Every mutation is an `Action` applied by `PortfolioStore`, which publishes the
// new record and persists it through the `PortfolioStorage` hook.

pub mod actions;
pub mod handlers;
pub mod presets;
pub mod seed;
pub mod storage;
pub mod store;
pub mod uploads;
pub mod validation;

pub use store::PortfolioStore;

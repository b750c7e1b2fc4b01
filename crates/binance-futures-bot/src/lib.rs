/*
[INPUT]:  Public API exports for the binance-futures-bot crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod logging;
pub mod orders;
pub mod presenter;

// Re-export main types for convenience
pub use config::BotConfig;
pub use orders::{OrderManager, OrderOutcome, OrderPresenter, OutcomeStatus};
pub use presenter::ConsolePresenter;

//! Business logic services

pub mod catalog;
pub mod ledger;

pub use catalog::CatalogService;
pub use ledger::TransactionLedger;

//! Teller ledger: account registration, cash withdrawals and deposits,
//! per-account transaction logs and plain-text ledger export.

pub mod app;
pub mod domain;
pub mod engine;
pub mod io;
pub mod prelude;
pub mod session;
pub mod storage;

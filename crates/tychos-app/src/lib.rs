//! Tychos simulator application: configuration wiring, the host frame loop and
//! the operations behind the `tychos` command.

pub mod error;
pub mod frame_loop;
pub mod platform;
pub mod session;

pub use error::AppError;

mod common;
mod config;
mod field;
mod logging;
mod mask;
mod matchmaker;
pub mod protocol;
mod registry;
pub mod server;
mod session;
mod ship;
pub mod transport;

pub use common::*;
pub use config::*;
pub use field::*;
pub use logging::init_logging;
pub use mask::*;
pub use matchmaker::*;
pub use registry::*;
pub use server::{dispatch, serve};
pub use session::*;
pub use ship::*;

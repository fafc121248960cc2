pub mod client;
pub mod common;
pub mod server;
pub mod utils;

pub use client::Client;
pub use common::endpoint::ReceiveOutcome;
pub use common::error::EndpointError;
pub use server::Server;

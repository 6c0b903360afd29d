//! HTTP relay that turns validated requests into executable invocations.
//!
//! Every endpoint shares one handler. The routing table decides which
//! executable runs, how its arguments are built, and how long it may take.

mod executor;
mod handlers;
mod router;
mod routes;

#[cfg(test)]
mod tests;

pub use executor::{CapturedOutput, ExecutionError, run_external};
pub use router::{create_router, serve};
pub use routes::{Endpoint, RelayPayload, RelayRoute, RelayRoutes};

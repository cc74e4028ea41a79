mod handlers;
mod middleware;
mod payloads;
mod responses;
pub mod routers;

pub mod handlers;
pub mod hubs;
pub mod middleware;
pub mod routes;

pub use routes::create_router;

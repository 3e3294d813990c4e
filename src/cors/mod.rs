mod middleware;
mod origins;

pub use middleware::origin_guard;
pub use origins::AllowedOrigins;

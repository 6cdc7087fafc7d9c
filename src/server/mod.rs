pub mod handlers;


pub use handlers::{configure_stats_routes, get_profile_stats, health_check};

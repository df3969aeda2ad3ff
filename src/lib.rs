pub mod args;
pub mod error;
pub mod leaderboard;
pub mod logging;
pub mod model;
pub mod odds;
pub mod score;
pub mod controller {
    pub mod board;
    pub mod cache;
    pub mod http_handlers;
    pub mod request;
}
pub mod view {
    pub mod board;
    pub mod index;
}

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

pub use error::PoolError;

pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod range;
pub mod stats;
pub mod ui;
pub mod state;
pub mod upstream;

pub use app::router;
pub use state::AppState;
pub use upstream::UpstreamConfig;

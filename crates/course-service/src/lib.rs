//! HTTP service for the course finder.
//!
//! Provides:
//! - `GET|POST /` keyword search over course titles
//! - `GET|POST /recommend` similar courses for an exact title, with keyword
//!   search as the fallback
//! - `GET|POST /dashboard` aggregate statistics for charting
//! - `GET /health` dataset liveness check
//!
//! Every request reads the dataset; the built recommendation pipeline is
//! reused while the dataset's content hash is unchanged.

pub mod cache;
pub mod error;
pub mod handlers;
pub mod params;
pub mod responses;
pub mod server;
pub mod state;

pub use cache::PipelineCache;
pub use error::ApiError;
pub use responses::{CourseEntry, HomeResponse, QueryMode, RecommendResponse};
pub use server::{create_router, run_server_with_shutdown, serve};
pub use state::AppState;

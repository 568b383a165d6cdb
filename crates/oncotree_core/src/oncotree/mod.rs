//! OncoTree REST API client.
//!
//! Two endpoints are used:
//! - `GET {url}/versions` - every published release
//! - `GET {url}/tumorTypes?version=<id>` - the flat list of tumor types

mod api;
mod types;

pub use api::{release_date_for, sort_versions, ApiError, ApiResult, OncoTreeClient, DEFAULT_API_URL};
pub use types::{TumorType, VersionInfo};

// coursedesk-api: Async Rust client for the course/discipline REST API

pub mod client;
pub mod courses;
pub mod disciplines;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{CourseClient, DEFAULT_BASE_URL};
pub use error::Error;
pub use transport::TransportConfig;
pub use types::{
    CourseBody, CourseResponse, DisciplineBody, DisciplineResponse, floor_workload, parse_api_date,
};

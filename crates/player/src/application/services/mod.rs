//! Application services
//!
//! REST use cases over `ApiPort`.

mod location_service;

pub use location_service::LocationService;

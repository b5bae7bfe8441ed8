pub mod http_client;
pub mod map;
pub mod platform;
pub mod script;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

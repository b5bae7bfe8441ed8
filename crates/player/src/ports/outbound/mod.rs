//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with the location API, the map
//! library, and the host platform without depending on concrete implementations.

pub mod api_port;
pub mod dialog_port;
pub mod map_port;
pub mod platform;
pub mod platform_port;
pub mod raw_api_port;

pub use api_port::{ApiError, ApiPort};
pub use dialog_port::DialogPort;
pub use map_port::{MapRendererPort, MarkerKey, MarkerPopup};
pub use platform::{DialogProvider, DocumentProvider};
pub use platform_port::PlatformPort;
pub use raw_api_port::RawApiPort;

#[cfg(any(test, feature = "testing"))]
pub use dialog_port::MockDialogPort;
#[cfg(any(test, feature = "testing"))]
pub use map_port::MockMapRendererPort;

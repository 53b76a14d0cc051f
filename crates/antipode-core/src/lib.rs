pub mod config;
pub mod constants;
pub mod coordinator;
pub mod debounce;
pub mod error;
pub mod geo;
pub mod permission;
pub mod renderer;
pub mod widget;

pub use config::*;
pub use coordinator::*;
pub use debounce::*;
pub use error::*;
pub use geo::*;
pub use permission::*;
pub use renderer::*;
pub use widget::*;

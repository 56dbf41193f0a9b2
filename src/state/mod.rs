pub mod registry;
pub mod viewport;

pub use registry::TouchRegistry;
pub use viewport::ViewportConfig;

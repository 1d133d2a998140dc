// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod clock;
pub mod config;
pub mod display;
pub mod engine;
pub mod feedback;
pub mod logging;
pub mod normalize;
pub mod runtime;
pub mod samples;
pub mod scoring;
pub mod session;

pub use engine::Engine;

// Application wiring.

#[allow(clippy::module_inception)]
pub mod app;

pub use app::App;

pub mod app;
pub mod files;
pub mod logging;
pub mod renderer;
pub mod settings;

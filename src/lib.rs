pub mod app;
pub mod headless;
pub mod model;

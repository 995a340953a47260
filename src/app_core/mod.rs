mod app;

pub use app::Oratus;

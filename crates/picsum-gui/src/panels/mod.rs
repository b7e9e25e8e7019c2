pub mod navigation;
pub mod viewport;

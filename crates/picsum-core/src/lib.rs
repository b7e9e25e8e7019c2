pub mod config;
pub mod consts;
pub mod display;
pub mod error;
pub mod io;
pub mod picture;
pub mod presenter;
pub mod viewport;

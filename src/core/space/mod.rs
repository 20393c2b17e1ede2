//! Space setup

pub mod configure;

pub use configure::SpaceSetupHandler;

pub mod components;
pub mod plugins;
pub mod region;
pub mod resources;

pub mod diagnostics;
pub mod grouping;
pub mod spawner;

mod qrz;

pub use qrz::{Qrz, DIRECTIONS};

pub mod loopback;
pub mod pattern;
pub mod target;

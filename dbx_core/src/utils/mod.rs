pub mod misc;
pub mod tokens;

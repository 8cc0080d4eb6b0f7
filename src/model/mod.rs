pub mod annotation;
pub mod color;

pub mod projector;
pub mod scrub;

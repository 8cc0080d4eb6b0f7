pub mod metadata;
pub mod preview;

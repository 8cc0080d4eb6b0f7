pub mod filter;
pub mod hover;

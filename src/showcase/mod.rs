pub mod engine;
pub mod fade;
pub mod indicator;
pub mod input;
pub mod slide;

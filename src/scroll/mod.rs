pub mod hub;
pub mod offset;
pub mod sampler;

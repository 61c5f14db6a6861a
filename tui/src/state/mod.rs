pub mod animator;
pub mod model;
pub mod session;

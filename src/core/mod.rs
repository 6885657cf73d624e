pub mod error;
pub mod model;
pub mod normalize;
pub mod session;

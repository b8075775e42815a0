pub mod index;
pub mod normalize;
pub mod session;
pub mod span;

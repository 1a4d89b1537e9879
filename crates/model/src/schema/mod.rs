pub mod canonical;
pub mod normalize;

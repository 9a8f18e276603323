pub mod analysis;
pub mod category;
pub mod score;
pub mod section;

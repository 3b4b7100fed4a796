pub mod category;
pub mod genre;

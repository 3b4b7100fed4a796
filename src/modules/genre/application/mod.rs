mod category_ids;
pub mod use_cases;

pub mod json_store;
pub mod question_bank;
pub mod schema;

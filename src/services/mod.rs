pub mod category_service;
pub mod question_service;
pub mod quiz_service;

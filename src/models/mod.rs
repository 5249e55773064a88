pub mod category;
pub mod question;

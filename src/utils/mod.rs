pub mod body;
pub mod deserializers;
pub mod pagination;
pub mod search;

pub mod chat;
pub mod crud;
pub mod info;

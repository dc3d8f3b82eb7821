pub mod about;
pub mod contact;
pub mod faq;
pub mod home;
pub mod not_found;
pub mod services;
pub mod track;

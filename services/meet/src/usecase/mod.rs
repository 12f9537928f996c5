pub mod access_code;
pub mod admin;
pub mod token;

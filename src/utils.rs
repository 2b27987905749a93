pub mod date;
pub mod http;

pub mod articles;
pub mod books;
pub mod core;
pub mod share;
pub mod utils;

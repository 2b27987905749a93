pub mod get_book_cmd;
pub mod share_book_cmd;

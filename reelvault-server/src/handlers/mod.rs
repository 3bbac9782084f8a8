pub mod create_title;
pub mod filter_titles;
pub mod list_titles;
pub mod upload_file;

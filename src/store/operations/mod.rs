pub mod read;
pub mod schema;
pub mod write;

pub use read::{get_message, list_messages};
pub use schema::init_schema;
pub use write::{delete_message, insert_message, update_message};

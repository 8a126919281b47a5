// Handlers module

pub mod create_message;
pub mod delete_message;
pub mod get_message;
pub mod list_messages;
pub mod update_message;

pub use create_message::create_message_handler;
pub use delete_message::delete_message_handler;
pub use get_message::get_message_handler;
pub use list_messages::list_messages_handler;
pub use update_message::update_message_handler;

use crate::models::ErrorBody;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};

/// 404 reply shared by every handler that looks up a message by id
pub(crate) fn message_not_found() -> WithStatus<Json> {
    warp::reply::with_status(
        warp::reply::json(&ErrorBody::new("Message not found")),
        StatusCode::NOT_FOUND,
    )
}

/// 500 reply for storage faults
pub(crate) fn internal_error() -> WithStatus<Json> {
    warp::reply::with_status(
        warp::reply::json(&ErrorBody::new("internal server error")),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}

// PATCH /messages/{id} handler

use crate::models::MessagePatch;
use crate::store::{MessageStore, MessageUpdate};
use std::convert::Infallible;
use tracing::{error, info};
use warp::http::StatusCode;

pub async fn update_message_handler(
    id: i64,
    patch: MessagePatch,
    store: MessageStore,
) -> Result<impl warp::Reply, Infallible> {
    info!("PATCH /messages/{}", id);

    // A patch without a body field is a no-op that still returns the row
    let update = MessageUpdate { body: patch.body };

    match store.update_message(id, update).await {
        Ok(Some(message)) => Ok(warp::reply::with_status(
            warp::reply::json(&message),
            StatusCode::OK,
        )),
        Ok(None) => Ok(super::message_not_found()),
        Err(e) => {
            error!("failed to update message {}: {}", id, e);
            Ok(super::internal_error())
        }
    }
}

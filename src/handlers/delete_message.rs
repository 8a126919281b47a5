// DELETE /messages/{id} handler

use crate::models::DeleteConfirmation;
use crate::store::MessageStore;
use std::convert::Infallible;
use tracing::{error, info};
use warp::http::StatusCode;

pub async fn delete_message_handler(
    id: i64,
    store: MessageStore,
) -> Result<impl warp::Reply, Infallible> {
    info!("DELETE /messages/{}", id);

    match store.delete_message(id).await {
        Ok(true) => Ok(warp::reply::with_status(
            warp::reply::json(&DeleteConfirmation::for_id(id)),
            StatusCode::OK,
        )),
        Ok(false) => Ok(super::message_not_found()),
        Err(e) => {
            error!("failed to delete message {}: {}", id, e);
            Ok(super::internal_error())
        }
    }
}

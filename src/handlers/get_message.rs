// GET /messages/{id} handler

use crate::store::MessageStore;
use std::convert::Infallible;
use tracing::{error, info};
use warp::http::StatusCode;

pub async fn get_message_handler(
    id: i64,
    store: MessageStore,
) -> Result<impl warp::Reply, Infallible> {
    info!("GET /messages/{}", id);

    match store.get_message(id).await {
        Ok(Some(message)) => Ok(warp::reply::with_status(
            warp::reply::json(&message),
            StatusCode::OK,
        )),
        Ok(None) => Ok(super::message_not_found()),
        Err(e) => {
            error!("failed to get message {}: {}", id, e);
            Ok(super::internal_error())
        }
    }
}

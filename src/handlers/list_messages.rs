// GET /messages handler

use crate::store::MessageStore;
use std::convert::Infallible;
use tracing::{error, info};
use warp::http::StatusCode;

pub async fn list_messages_handler(
    store: MessageStore,
) -> Result<impl warp::Reply, Infallible> {
    info!("GET /messages");

    match store.list_messages().await {
        Ok(messages) => Ok(warp::reply::with_status(
            warp::reply::json(&messages),
            StatusCode::OK,
        )),
        Err(e) => {
            error!("failed to list messages: {}", e);
            Ok(super::internal_error())
        }
    }
}

// POST /messages handler

use crate::models::{ErrorBody, NewMessage};
use crate::store::MessageStore;
use std::convert::Infallible;
use tracing::{error, info};
use warp::http::StatusCode;

pub async fn create_message_handler(
    request: NewMessage,
    store: MessageStore,
) -> Result<impl warp::Reply, Infallible> {
    info!("POST /messages");

    // Both fields are required; report absence before touching the store
    let (body, username) = match (request.body, request.username) {
        (Some(body), Some(username)) => (body, username),
        _ => {
            return Ok(warp::reply::with_status(
                warp::reply::json(&ErrorBody::new(
                    "Missing 'body' or 'username' in request data",
                )),
                StatusCode::BAD_REQUEST,
            ));
        }
    };

    match store.insert_message(&body, &username).await {
        Ok(message) => Ok(warp::reply::with_status(
            warp::reply::json(&message),
            StatusCode::CREATED,
        )),
        Err(e) => {
            error!("failed to create message: {}", e);
            Ok(super::internal_error())
        }
    }
}

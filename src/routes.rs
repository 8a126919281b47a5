// Route definitions and rejection handling

use crate::handlers;
use crate::models::{ErrorBody, MessagePatch};
use crate::store::MessageStore;
use warp::filters::body::BodyDeserializeError;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

pub fn configure_routes(
    store: MessageStore,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let store_filter = warp::any().map(move || store.clone());

    // GET /messages
    let list_messages = warp::path("messages")
        .and(warp::path::end())
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(handlers::list_messages_handler);

    // GET /messages/{id}
    let get_message = warp::path("messages")
        .and(warp::path::param::<i64>())
        .and(warp::path::end())
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(handlers::get_message_handler);

    // POST /messages
    let create_message = warp::path("messages")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(store_filter.clone())
        .and_then(handlers::create_message_handler);

    // PATCH /messages/{id}
    // A missing or unparseable request body counts as an empty patch
    let patch_body = warp::body::json::<MessagePatch>()
        .or(warp::any().map(MessagePatch::default))
        .unify();
    let update_message = warp::path("messages")
        .and(warp::path::param::<i64>())
        .and(warp::path::end())
        .and(warp::patch())
        .and(patch_body)
        .and(store_filter.clone())
        .and_then(handlers::update_message_handler);

    // DELETE /messages/{id}
    let delete_message = warp::path("messages")
        .and(warp::path::param::<i64>())
        .and(warp::path::end())
        .and(warp::delete())
        .and(store_filter)
        .and_then(handlers::delete_message_handler);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST", "PATCH", "DELETE"]);

    // Combine routes
    list_messages
        .or(get_message)
        .or(create_message)
        .or(update_message)
        .or(delete_message)
        .recover(handle_rejection)
        .with(cors)
}

/// Map warp rejections onto the JSON error envelope
///
/// A body that fails to deserialize can only come from the create route,
/// whose contract is a 400 with the missing-fields message. Everything else
/// gets a generic envelope with the matching status code.
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Rejection> {
    let (message, status) = if err.is_not_found() {
        ("Not found", StatusCode::NOT_FOUND)
    } else if err.find::<BodyDeserializeError>().is_some() {
        (
            "Missing 'body' or 'username' in request data",
            StatusCode::BAD_REQUEST,
        )
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        ("Method not allowed", StatusCode::METHOD_NOT_ALLOWED)
    } else {
        ("internal server error", StatusCode::INTERNAL_SERVER_ERROR)
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&ErrorBody::new(message)),
        status,
    ))
}

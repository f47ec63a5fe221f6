use kinecore::api_interface::ErrorBody;
use kinecore::prelude::{KinematicSummary, KinematicsError};
use serde::Serialize;
use warp::http::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Attaches the CORS headers every endpoint response carries.
pub fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    response
}

pub fn json_reply<T: Serialize>(body: &T, status: StatusCode) -> Response {
    warp::reply::with_status(warp::reply::json(body), status).into_response()
}

pub fn empty_reply(status: StatusCode) -> Response {
    warp::reply::with_status(warp::reply(), status).into_response()
}

pub fn summary_reply(summary: &KinematicSummary) -> Response {
    json_reply(summary, StatusCode::OK)
}

/// Maps a calculation error to its fixed public body. Internal details stay
/// in the logs.
pub fn error_reply(err: &KinematicsError) -> Response {
    match err {
        KinematicsError::Validation(_) => json_reply(
            &ErrorBody::insufficient_coordinates(),
            StatusCode::BAD_REQUEST,
        ),
        KinematicsError::Internal(_) => {
            json_reply(&ErrorBody::internal(), StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub fn method_not_allowed_reply() -> Response {
    json_reply(&ErrorBody::method_not_allowed(), StatusCode::METHOD_NOT_ALLOWED)
}

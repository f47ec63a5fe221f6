use crate::http_bridge::model::{
    empty_reply, error_reply, method_not_allowed_reply, summary_reply, with_cors,
};
use crate::workflow::config::ServerConfig;
use crate::workflow::runner::Runner;
use anyhow::Context;
use log::info;
use std::future::Future;
use std::sync::Arc;
use warp::filters::path::FullPath;
use warp::http::{Method, StatusCode};
use warp::hyper::body::Bytes;
use warp::reply::Response;
use warp::{Filter, Rejection};

/// Bridge that hosts the velocity endpoint over HTTP.
pub struct HttpBridge {
    config: ServerConfig,
    runner: Arc<Runner>,
}

impl HttpBridge {
    pub fn new(config: ServerConfig, runner: Arc<Runner>) -> Self {
        Self { config, runner }
    }

    /// Filter answering every method on the configured endpoint path. Other
    /// paths fall through to warp's not-found rejection.
    pub fn routes(&self) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone {
        let endpoint = self.config.normalized_endpoint();
        let runner = self.runner.clone();
        let runner_filter = warp::any().map(move || runner.clone());

        warp::path::full()
            .and_then(move |full: FullPath| {
                let matched = full.as_str() == endpoint;
                async move {
                    if matched {
                        Ok::<(), Rejection>(())
                    } else {
                        Err(warp::reject::not_found())
                    }
                }
            })
            .untuple_one()
            .and(warp::method())
            .and(warp::body::bytes())
            .and(runner_filter)
            .map(|method: Method, body: Bytes, runner: Arc<Runner>| {
                dispatch(&method, &body, &runner)
            })
    }

    /// Serves until `shutdown` resolves.
    pub async fn serve<F>(&self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let (addr, server) = warp::serve(self.routes())
            .try_bind_with_graceful_shutdown(self.config.bind_address(), shutdown)
            .with_context(|| format!("binding {}", self.config.bind_address()))?;
        info!(
            "velocity endpoint listening on http://{}{}",
            addr,
            self.config.normalized_endpoint()
        );
        server.await;
        Ok(())
    }
}

fn dispatch(method: &Method, body: &[u8], runner: &Runner) -> Response {
    let response = if method == Method::OPTIONS {
        empty_reply(StatusCode::OK)
    } else if method == Method::POST {
        match runner.execute(body) {
            Ok(summary) => summary_reply(&summary),
            Err(err) => error_reply(&err),
        }
    } else {
        method_not_allowed_reply()
    };
    with_cors(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    const ENDPOINT: &str = "/api/calculate-velocity";

    fn bridge() -> HttpBridge {
        HttpBridge::new(ServerConfig::default(), Arc::new(Runner::new()))
    }

    fn assert_cors(headers: &warp::http::HeaderMap) {
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
        assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    }

    fn body_json(body: &[u8]) -> Value {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn post_returns_rounded_summary() {
        let routes = bridge().routes();
        let response = warp::test::request()
            .method("POST")
            .path(ENDPOINT)
            .header("content-type", "application/json")
            .json(&json!({
                "coordinates": [
                    {"x": 3, "y": 4, "z": 0, "timestamp": 2},
                    {"x": 0, "y": 0, "z": 0, "timestamp": 0}
                ]
            }))
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(response.headers());
        assert_eq!(
            body_json(response.body()),
            json!({
                "distance": 5.0,
                "speed": 2.5,
                "velocity": {"x": 1.5, "y": 2.0, "z": 0.0}
            })
        );
    }

    #[tokio::test]
    async fn single_coordinate_is_bad_request() {
        let routes = bridge().routes();
        let response = warp::test::request()
            .method("POST")
            .path(ENDPOINT)
            .json(&json!({"coordinates": [{"x": 1, "y": 1, "z": 1, "timestamp": 0}]}))
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_cors(response.headers());
        assert_eq!(
            body_json(response.body()),
            json!({"error": "At least 2 coordinates required"})
        );
    }

    #[tokio::test]
    async fn missing_body_is_bad_request() {
        let routes = bridge().routes();
        let response = warp::test::request()
            .method("POST")
            .path(ENDPOINT)
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response.body()),
            json!({"error": "At least 2 coordinates required"})
        );
    }

    #[tokio::test]
    async fn malformed_coordinate_is_masked_internal_error() {
        let routes = bridge().routes();
        let response = warp::test::request()
            .method("POST")
            .path(ENDPOINT)
            .json(&json!({
                "coordinates": [
                    {"x": 0, "y": 0, "z": 0, "timestamp": 0},
                    {"x": 1, "y": 1, "timestamp": 1}
                ]
            }))
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_cors(response.headers());
        assert_eq!(
            body_json(response.body()),
            json!({"error": "Internal server error"})
        );
    }

    #[tokio::test]
    async fn get_is_method_not_allowed() {
        let routes = bridge().routes();
        let response = warp::test::request()
            .method("GET")
            .path(ENDPOINT)
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_cors(response.headers());
        assert_eq!(
            body_json(response.body()),
            json!({"error": "Method not allowed"})
        );
    }

    #[tokio::test]
    async fn options_is_empty_preflight() {
        let routes = bridge().routes();
        let response = warp::test::request()
            .method("OPTIONS")
            .path(ENDPOINT)
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.body().is_empty());
        assert_cors(response.headers());
    }

    #[tokio::test]
    async fn other_paths_are_not_routed() {
        let routes = bridge().routes();
        let matched = warp::test::request()
            .method("POST")
            .path("/api/other")
            .matches(&routes)
            .await;
        assert!(!matched);
    }

    #[tokio::test]
    async fn configured_endpoint_is_honoured() {
        let config = ServerConfig {
            endpoint: "track/summary/".into(),
            ..ServerConfig::default()
        };
        let routes = HttpBridge::new(config, Arc::new(Runner::new())).routes();
        let response = warp::test::request()
            .method("OPTIONS")
            .path("/track/summary")
            .reply(&routes)
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn outcomes_are_counted() {
        let runner = Arc::new(Runner::new());
        let routes = HttpBridge::new(ServerConfig::default(), runner.clone()).routes();
        warp::test::request()
            .method("POST")
            .path(ENDPOINT)
            .json(&json!({"coordinates": []}))
            .reply(&routes)
            .await;
        warp::test::request()
            .method("GET")
            .path(ENDPOINT)
            .reply(&routes)
            .await;

        let snapshot = runner.metrics();
        assert_eq!(snapshot.rejected, 1);
        assert_eq!(snapshot.processed, 0);
        assert_eq!(snapshot.failed, 0);
    }
}

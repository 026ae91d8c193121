/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

//! Stand-in for the upstream backend.
//!
//! It records every request it receives and answers:
//! - `POST /login` - `{"token":"abc"}` for `username: u` / `password: p`, `401 Bad Credentials` for
//!   `username: locked`, otherwise 401 `bad creds`
//! - `GET /api/v1/external/chat/getRides` - a rides page, or a non-JSON 200 for `riderId: garbled`
//! - `GET /api/v1/external/chat/info/RideAction` - a JSON array, or 404 for `rideActionStr=UNKNOWN`

use actix_web::{
    dev::ServerHandle,
    http::StatusCode,
    web::{self, Bytes, Data, Query},
    App, HttpRequest, HttpResponse, HttpServer,
};
use serde_json::json;
use std::{
    collections::HashMap,
    net::TcpListener,
    sync::{Arc, Mutex},
};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    /// Keyed by lower-case header name.
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn header(&self, header_name: &str) -> Option<&str> {
        self.headers
            .get(&header_name.to_ascii_lowercase())
            .map(|header_value| header_value.as_str())
    }
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<RecordedRequest>>>);

pub struct MockUpstream {
    pub base_url: String,
    recorder: Recorder,
    handle: ServerHandle,
}

impl MockUpstream {
    /// Binds an ephemeral port and serves from the current actix system.
    pub fn start() -> MockUpstream {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind mock upstream");
        let port = listener
            .local_addr()
            .expect("Mock upstream has no local address")
            .port();

        let recorder = Recorder::default();
        let data = Data::new(recorder.clone());

        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .default_service(web::to(respond))
        })
        .workers(1)
        .disable_signals()
        .listen(listener)
        .expect("Failed to listen on mock upstream")
        .run();

        let handle = server.handle();
        actix_web::rt::spawn(server);

        MockUpstream {
            base_url: format!("http://127.0.0.1:{port}"),
            recorder,
            handle,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorder
            .0
            .lock()
            .expect("Mock upstream recorder poisoned")
            .clone()
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

/// A base url on which nothing is listening.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind a free port");
    let port = listener
        .local_addr()
        .expect("Free port listener has no local address")
        .port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

fn header<'a>(req: &'a HttpRequest, header_name: &str) -> &'a str {
    req.headers()
        .get(header_name)
        .and_then(|header_value| header_value.to_str().ok())
        .unwrap_or_default()
}

fn query_value<'a>(query: &'a [(String, String)], key: &str) -> &'a str {
    query
        .iter()
        .find(|(query_key, _)| query_key == key)
        .map(|(_, query_value)| query_value.as_str())
        .unwrap_or_default()
}

async fn respond(req: HttpRequest, body: Bytes, recorder: Data<Recorder>) -> HttpResponse {
    let query = Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map(|query| query.into_inner())
        .unwrap_or_default();

    let headers = req
        .headers()
        .iter()
        .map(|(header_name, header_value)| {
            (
                header_name.as_str().to_string(),
                String::from_utf8_lossy(header_value.as_bytes()).into_owned(),
            )
        })
        .collect::<HashMap<String, String>>();

    recorder
        .0
        .lock()
        .expect("Mock upstream recorder poisoned")
        .push(RecordedRequest {
            method: req.method().to_string(),
            path: req.path().to_string(),
            query: query.clone(),
            headers,
            body,
        });

    match (req.method().as_str(), req.path()) {
        ("POST", "/login") => {
            if header(&req, "username") == "u" && header(&req, "password") == "p" {
                HttpResponse::Ok().json(json!({ "token": "abc" }))
            } else if header(&req, "username") == "locked" {
                HttpResponse::build(StatusCode::UNAUTHORIZED)
                    .reason("Bad Credentials")
                    .body("account locked")
            } else {
                HttpResponse::Unauthorized().body("bad creds")
            }
        }
        ("GET", "/api/v1/external/chat/getRides") => {
            if header(&req, "riderId") == "garbled" {
                HttpResponse::Ok()
                    .content_type("text/plain")
                    .body("<html>not json</html>")
            } else {
                HttpResponse::Ok().json(json!({
                    "rides": [{ "rideId": "ride-1", "status": "COMPLETED" }],
                    "startRecord": query_value(&query, "startRecord"),
                }))
            }
        }
        ("GET", "/api/v1/external/chat/info/RideAction") => {
            if query_value(&query, "rideActionStr") == "UNKNOWN" {
                HttpResponse::NotFound().body("no such ride action")
            } else {
                HttpResponse::Ok().json(json!([
                    { "action": query_value(&query, "rideActionStr") }
                ]))
            }
        }
        _ => HttpResponse::NotFound().finish(),
    }
}

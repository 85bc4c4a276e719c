use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use crate::domain::activity::Activity;

/// A request as received by the [MockBackend]
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Option<Value>
}

#[derive(Default)]
struct Backend {
    users: HashMap<String, Value>,
    links: HashMap<String, Value>,
    activities: HashMap<u64, (Value, Duration)>,
    failing: HashSet<String>,
    requests: Vec<RecordedRequest>,
    next_id: u64,
    details_in_flight: usize,
    peak_details_in_flight: usize
}

type SharedBackend = Arc<Mutex<Backend>>;

/// An in-process stand-in for the activity REST backend, listening on an ephemeral port.
/// It records every request and answers from the data registered by the test.
pub struct MockBackend {
    backend: SharedBackend,
    url: String
}

impl MockBackend {
    pub async fn start() -> Self {
        let backend = Arc::new(Mutex::new(Backend { next_id: 100, ..Backend::default() }));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let router = Router::new()
            .fallback(handle)
            .with_state(backend.clone());
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap()
        });
        Self { backend, url }
    }

    /// User "42" linked to activities 7 and 9
    pub async fn scenario() -> Self {
        let mock = Self::start().await;
        mock.add_user("42", json!({"UserID": 42}));
        mock.add_links("42", &[7, 9]);
        // The backend answers numeric columns with JSON numbers
        mock.add_activity_json(7, json!({"ActivityID": 7, "ActivityName": "Run", "DurationTime": 30, "TotalCaloriesBurnt": 300}));
        mock.add_activity_json(9, json!({"ActivityID": 9, "ActivityName": "Swim", "DurationTime": 45, "TotalCaloriesBurnt": 410}));
        mock
    }

    pub fn url(&self) -> String {
        self.url.clone()
    }

    pub fn add_user(&self, id: &str, user: Value) {
        self.backend.lock().unwrap().users.insert(id.to_string(), user);
    }

    pub fn add_links(&self, user_id: &str, activity_ids: &[u64]) {
        let links: Vec<Value> = activity_ids.iter()
            .map(|id| json!({"UserID": user_id, "ActivityID": id}))
            .collect();
        self.backend.lock().unwrap().links.insert(user_id.to_string(), Value::Array(links));
    }

    pub fn add_activity(&self, activity: &Activity) {
        self.add_delayed_activity(activity, Duration::ZERO);
    }

    /// Registers an activity whose detail response is sent only after the given delay
    pub fn add_delayed_activity(&self, activity: &Activity, delay: Duration) {
        let value = serde_json::to_value(activity).unwrap();
        self.backend.lock().unwrap().activities.insert(activity.id, (value, delay));
    }

    /// Registers the raw JSON answered for an activity
    pub fn add_activity_json(&self, id: u64, value: Value) {
        self.backend.lock().unwrap().activities.insert(id, (value, Duration::ZERO));
    }

    /// Highest number of activity detail requests that were being answered at the same time
    pub fn peak_details_in_flight(&self) -> usize {
        self.backend.lock().unwrap().peak_details_in_flight
    }

    /// Lets every request to the path fail with an internal server error
    pub fn fail(&self, path: &str) {
        self.backend.lock().unwrap().failing.insert(path.to_string());
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.backend.lock().unwrap().requests.clone()
    }
}

async fn handle(State(backend): State<SharedBackend>, method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let path = uri.path().to_string();
    let body = serde_json::from_slice::<Value>(&body).ok();
    let content_type = headers.get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(String::from);
    let is_detail = path.starts_with("/activities/");
    let (response, delay) = {
        let mut guard = backend.lock().unwrap();
        if is_detail {
            guard.details_in_flight += 1;
            guard.peak_details_in_flight = guard.peak_details_in_flight.max(guard.details_in_flight);
        }
        guard.requests.push(RecordedRequest {
            method: method.to_string(),
            path: path.clone(),
            content_type,
            body: body.clone()
        });
        guard.reply(&method, &path, body)
    };
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    if is_detail {
        backend.lock().unwrap().details_in_flight -= 1;
    }
    response
}

impl Backend {
    fn reply(&mut self, method: &Method, path: &str, body: Option<Value>) -> (Response, Duration) {
        if self.failing.contains(path) {
            return (StatusCode::INTERNAL_SERVER_ERROR.into_response(), Duration::ZERO);
        }
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        match (method.as_str(), segments.as_slice()) {
            ("GET", ["users", id]) => (found(self.users.get(*id).cloned()), Duration::ZERO),
            ("GET", ["tracksactivities", id]) => (found(self.links.get(*id).cloned()), Duration::ZERO),
            ("GET", ["activities", id]) => {
                match id.parse::<u64>().ok().and_then(|id| self.activities.get(&id)) {
                    Some((value, delay)) => (Json(value.clone()).into_response(), *delay),
                    None => (StatusCode::NOT_FOUND.into_response(), Duration::ZERO)
                }
            }
            ("POST", ["createactivities"]) => {
                let mut created = body.unwrap_or(Value::Null);
                created["ActivityID"] = json!(self.next_id);
                self.next_id += 1;
                (Json(created).into_response(), Duration::ZERO)
            }
            ("PUT", ["updateactivities"]) => (Json(body.unwrap_or(Value::Null)).into_response(), Duration::ZERO),
            ("DELETE", ["deleteactivities", _]) => (StatusCode::OK.into_response(), Duration::ZERO),
            _ => (StatusCode::NOT_FOUND.into_response(), Duration::ZERO)
        }
    }
}

fn found(value: Option<Value>) -> Response {
    match value {
        Some(value) => Json(value).into_response(),
        None => StatusCode::NOT_FOUND.into_response()
    }
}

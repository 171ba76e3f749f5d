//! In-process stand-in for the question-bank service.
#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug)]
pub enum CategoriesReply {
    Body(Value),
    Text(&'static str),
    Status(u16),
}

#[derive(Clone, Debug)]
pub struct StubConfig {
    pub categories: CategoriesReply,
    pub add_status: u16,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            categories: CategoriesReply::Body(json!({
                "success": true,
                "categories": {"1": "Science", "2": "Art", "10": "Sports"}
            })),
            add_status: 200,
        }
    }
}

#[derive(Clone)]
struct StubState {
    config: StubConfig,
    received: Arc<Mutex<Vec<Value>>>,
    cookies: Arc<Mutex<Vec<Option<String>>>>,
}

pub struct Stub {
    pub base_url: String,
    received: Arc<Mutex<Vec<Value>>>,
    cookies: Arc<Mutex<Vec<Option<String>>>>,
}

impl Stub {
    /// Bodies of every `POST /questions`, in arrival order.
    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }

    /// Cookie header of every `POST /questions`.
    pub fn cookies(&self) -> Vec<Option<String>> {
        self.cookies.lock().unwrap().clone()
    }
}

pub fn start(config: StubConfig) -> Stub {
    let state = StubState {
        config,
        received: Arc::default(),
        cookies: Arc::default(),
    };
    let stub = Stub {
        base_url: String::new(),
        received: Arc::clone(&state.received),
        cookies: Arc::clone(&state.cookies),
    };

    let app = Router::new()
        .route("/categories", get(categories))
        .route("/categories/{id}/questions", get(questions_in_category))
        .route("/questions", get(list_questions).post(add_question))
        .route("/questions/search", post(search))
        .route("/questions/{id}", delete(delete_question))
        .route("/quizzes", post(quiz))
        .with_state(state);

    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    let addr = rx.recv().unwrap();

    Stub {
        base_url: format!("http://{}", addr),
        ..stub
    }
}

fn failure(code: u16) -> Response {
    let status = StatusCode::from_u16(code).unwrap();
    (
        status,
        Json(json!({
            "success": false,
            "error": code,
            "message": status.canonical_reason().unwrap_or("Error"),
        })),
    )
        .into_response()
}

fn bank() -> Vec<Value> {
    vec![
        json!({"id": 1, "question": "Largest planet?", "answer": "Jupiter", "category": 1, "difficulty": 2}),
        json!({"id": 2, "question": "Painter of the Mona Lisa?", "answer": "Leonardo", "category": 2, "difficulty": 1}),
        json!({"id": 3, "question": "Closest planet to the sun?", "answer": "Mercury", "category": 1, "difficulty": 3}),
    ]
}

async fn categories(State(s): State<StubState>) -> Response {
    match s.config.categories {
        CategoriesReply::Body(body) => (
            [(header::SET_COOKIE, "session=stub; Path=/")],
            Json(body),
        )
            .into_response(),
        CategoriesReply::Text(text) => text.into_response(),
        CategoriesReply::Status(code) => failure(code),
    }
}

async fn add_question(
    State(s): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    s.received.lock().unwrap().push(body);
    s.cookies.lock().unwrap().push(
        headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    );
    if s.config.add_status == 200 {
        Json(json!({"success": true, "created": 42, "total_questions": 4})).into_response()
    } else {
        failure(s.config.add_status)
    }
}

#[derive(Deserialize)]
struct PageQuery {
    page: Option<u32>,
}

async fn list_questions(Query(q): Query<PageQuery>) -> Response {
    if q.page.unwrap_or(1) != 1 {
        return failure(404);
    }
    let questions = bank();
    Json(json!({
        "success": true,
        "questions": questions,
        "total_questions": questions.len(),
        "categories": {"1": "Science", "2": "Art"},
        "current_category": null,
    }))
    .into_response()
}

async fn search(Json(body): Json<Value>) -> Response {
    let term = body["searchTerm"].as_str().unwrap_or_default().to_lowercase();
    let found: Vec<Value> = bank()
        .into_iter()
        .filter(|q| {
            q["question"]
                .as_str()
                .unwrap_or_default()
                .to_lowercase()
                .contains(&term)
        })
        .collect();
    if found.is_empty() || term.trim().is_empty() {
        return failure(404);
    }
    Json(json!({"success": true, "total_questions": found.len(), "questions": found}))
        .into_response()
}

async fn questions_in_category(Path(id): Path<u64>) -> Response {
    let found: Vec<Value> = bank()
        .into_iter()
        .filter(|q| q["category"].as_u64() == Some(id))
        .collect();
    if found.is_empty() {
        return failure(404);
    }
    Json(json!({
        "success": true,
        "questions": found,
        "total_questions": found.len(),
        "current_category": id,
    }))
    .into_response()
}

async fn delete_question(Path(id): Path<u64>) -> Response {
    if bank().iter().any(|q| q["id"].as_u64() == Some(id)) {
        Json(json!({"success": true, "id": id})).into_response()
    } else {
        failure(404)
    }
}

async fn quiz(Json(body): Json<Value>) -> Response {
    let previous: Vec<u64> = body["previous_questions"]
        .as_array()
        .map(|ids| ids.iter().filter_map(Value::as_u64).collect())
        .unwrap_or_default();
    let category = body["quiz_category"]["id"].as_u64().unwrap_or(0);

    let next = bank().into_iter().find(|q| {
        let id = q["id"].as_u64().unwrap_or_default();
        !previous.contains(&id) && (category == 0 || q["category"].as_u64() == Some(category))
    });
    match next {
        Some(question) => Json(json!({"success": true, "question": question})).into_response(),
        None => failure(404),
    }
}

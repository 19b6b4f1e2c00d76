use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Multipart, State},
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::sync::Mutex;

/// What the backend double should answer to the next /upload call.
#[derive(Debug, Clone)]
pub enum UploadScript {
    /// Analysis succeeds; the meal is folded into the running totals.
    Success {
        name: String,
        calories: f64,
        proteins: f64,
        carbs: f64,
        fats: f64,
    },
    /// Analysis fails with a message; totals stay untouched.
    Failure(String),
    /// Reply claims success but carries no meal payload.
    Malformed,
}

impl Default for UploadScript {
    fn default() -> Self {
        UploadScript::Failure("Could not analyze image".to_string())
    }
}

#[derive(Debug, Default)]
struct BackendState {
    calories: f64,
    proteins: f64,
    carbs: f64,
    fats: f64,
    streak: u32,
    upload_script: UploadScript,
    upload_hits: u32,
    streak_hits: u32,
    reset_hits: u32,
    last_file_name: Option<String>,
    last_food_name: Option<String>,
    last_food_quantity: Option<String>,
    last_image_len: usize,
}

type SharedState = Arc<Mutex<BackendState>>;

/// In-process stand-in for the nutrition server.
///
/// Speaks the same four routes with the same JSON shapes, and records
/// every request so tests can assert how often each route was hit.
#[derive(Clone)]
pub struct MockBackend {
    pub base_url: String,
    state: SharedState,
}

impl MockBackend {
    /// Binds an ephemeral port and serves the backend until the test ends.
    pub async fn spawn() -> MockBackend {
        let state: SharedState = Arc::new(Mutex::new(BackendState::default()));
        let app = Router::new()
            .route("/upload", post(upload))
            .route("/daily-stats", get(daily_stats))
            .route("/update-streak", post(update_streak))
            .route("/reset-daily", post(reset_daily))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Failed to read mock backend address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock backend crashed");
        });

        MockBackend {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub async fn script_upload(&self, script: UploadScript) {
        self.state.lock().await.upload_script = script;
    }

    pub async fn set_totals(&self, calories: f64, proteins: f64, carbs: f64, fats: f64) {
        let mut state = self.state.lock().await;
        state.calories = calories;
        state.proteins = proteins;
        state.carbs = carbs;
        state.fats = fats;
    }

    pub async fn set_streak(&self, streak: u32) {
        self.state.lock().await.streak = streak;
    }

    pub async fn streak(&self) -> u32 {
        self.state.lock().await.streak
    }

    pub async fn upload_hits(&self) -> u32 {
        self.state.lock().await.upload_hits
    }

    pub async fn streak_hits(&self) -> u32 {
        self.state.lock().await.streak_hits
    }

    pub async fn reset_hits(&self) -> u32 {
        self.state.lock().await.reset_hits
    }

    /// File name, food name, and quantity seen on the last upload.
    pub async fn last_upload_fields(&self) -> (Option<String>, Option<String>, Option<String>) {
        let state = self.state.lock().await;
        (
            state.last_file_name.clone(),
            state.last_food_name.clone(),
            state.last_food_quantity.clone(),
        )
    }

    pub async fn last_image_len(&self) -> usize {
        self.state.lock().await.last_image_len
    }
}

fn totals_json(state: &BackendState) -> Value {
    json!({
        "calories": state.calories,
        "proteins": state.proteins,
        "carbs": state.carbs,
        "fats": state.fats,
        "streak": state.streak,
    })
}

async fn upload(State(state): State<SharedState>, mut multipart: Multipart) -> Json<Value> {
    let mut file_name = None;
    let mut food_name = None;
    let mut food_quantity = None;
    let mut image_len = 0;
    while let Some(field) = multipart.next_field().await.expect("Failed to read multipart field") {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                file_name = field.file_name().map(str::to_string);
                image_len = field.bytes().await.expect("Failed to read image bytes").len();
            }
            "food_name" => food_name = Some(field.text().await.expect("Failed to read food_name")),
            "food_quantity" => {
                food_quantity = Some(field.text().await.expect("Failed to read food_quantity"));
            }
            _ => {}
        }
    }

    let mut state = state.lock().await;
    state.upload_hits += 1;
    state.last_file_name = file_name;
    state.last_food_name = food_name;
    state.last_food_quantity = food_quantity;
    state.last_image_len = image_len;

    match state.upload_script.clone() {
        UploadScript::Success {
            name,
            calories,
            proteins,
            carbs,
            fats,
        } => {
            state.calories += calories;
            state.proteins += proteins;
            state.carbs += carbs;
            state.fats += fats;
            Json(json!({
                "success": true,
                "current_meal": {
                    "name": name,
                    "calories": calories,
                    "proteins": proteins,
                    "carbs": carbs,
                    "fats": fats,
                },
                "daily_total": totals_json(&state),
            }))
        }
        UploadScript::Failure(message) => Json(json!({ "success": false, "error": message })),
        UploadScript::Malformed => Json(json!({ "success": true })),
    }
}

async fn daily_stats(State(state): State<SharedState>) -> Json<Value> {
    let state = state.lock().await;
    Json(totals_json(&state))
}

async fn update_streak(State(state): State<SharedState>) -> Json<Value> {
    let mut state = state.lock().await;
    state.streak_hits += 1;
    state.streak += 1;
    Json(json!({ "success": true, "streak": state.streak }))
}

async fn reset_daily(State(state): State<SharedState>) -> Json<Value> {
    let mut state = state.lock().await;
    state.reset_hits += 1;
    state.calories = 0.0;
    state.proteins = 0.0;
    state.carbs = 0.0;
    state.fats = 0.0;
    Json(json!({ "success": true }))
}

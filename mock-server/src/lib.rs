use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub mod config;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub user_id: String,
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// Body of `POST /todos` and `PUT /todos/{id}`. Any `id` in the body is
/// ignored; the server assigns it on create and takes it from the path on
/// update.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Tasks in insertion order plus the next id to hand out.
#[derive(Debug)]
pub struct Store {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Store {
    pub fn seeded(tasks: Vec<Task>) -> Self {
        let next_id = tasks
            .iter()
            .filter_map(|task| task.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        Self { tasks, next_id }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router preloaded with `tasks`.
pub fn app_with(tasks: Vec<Task>) -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded(tasks)));
    Router::new()
        .route("/todos", get(list_tasks).post(create_task))
        .route("/todos/{id}", get(get_task).put(update_task).delete(delete_task))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn list_tasks(State(db): State<Db>) -> Json<Vec<Task>> {
    Json(db.read().await.tasks.clone())
}

async fn create_task(
    State(db): State<Db>,
    Json(input): Json<TaskInput>,
) -> (StatusCode, Json<Task>) {
    let mut store = db.write().await;
    let task = Task {
        user_id: input.user_id,
        id: store.next_id.to_string(),
        title: input.title,
        completed: input.completed,
    };
    store.next_id += 1;
    store.tasks.push(task.clone());
    (StatusCode::CREATED, Json(task))
}

async fn get_task(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Task>, StatusCode> {
    let store = db.read().await;
    store
        .position(&id)
        .map(|index| Json(store.tasks[index].clone()))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_task(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<TaskInput>,
) -> Result<Json<Task>, StatusCode> {
    let mut store = db.write().await;
    let index = store.position(&id).ok_or(StatusCode::NOT_FOUND)?;
    let task = &mut store.tasks[index];
    task.user_id = input.user_id;
    task.title = input.title;
    task.completed = input.completed;
    Ok(Json(task.clone()))
}

async fn delete_task(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let index = store.position(&id).ok_or(StatusCode::NOT_FOUND)?;
    store.tasks.remove(index);
    Ok(StatusCode::OK)
}

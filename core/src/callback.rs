//! Completion-callback forms of the client operations.
//!
//! Each `spawn_*` method clones the client into a new tokio task and returns
//! the task's `JoinHandle` right away. The completion runs inside that task,
//! after the request has been mapped, so it is never called from within
//! `spawn_*` itself and, being `FnOnce`, runs at most once. It runs exactly
//! once unless the runtime shuts down first.
//!
//! # Panics
//! Every `spawn_*` method panics when called outside a tokio runtime.

use tokio::task::JoinHandle;

use crate::client::TodoApiClient;
use crate::error::Result;
use crate::http::Transport;
use crate::types::Task;

impl<T> TodoApiClient<T>
where
    T: Transport + Clone + 'static,
{
    pub fn spawn_get_all_tasks<F>(&self, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Vec<Task>>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move { completion(client.get_all_tasks().await) })
    }

    pub fn spawn_get_task_by_id<F>(&self, id: &str, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Task>) + Send + 'static,
    {
        let client = self.clone();
        let id = id.to_string();
        tokio::spawn(async move { completion(client.get_task_by_id(&id).await) })
    }

    pub fn spawn_add_task_to_user<F>(
        &self,
        user_id: &str,
        title: &str,
        completed: bool,
        completion: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<Task>) + Send + 'static,
    {
        let client = self.clone();
        let user_id = user_id.to_string();
        let title = title.to_string();
        tokio::spawn(async move {
            completion(client.add_task_to_user(&user_id, &title, completed).await);
        })
    }

    pub fn spawn_update_task<F>(&self, task: Task, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<Task>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move { completion(client.update_task(&task).await) })
    }

    pub fn spawn_delete_task_by_id<F>(&self, id: &str, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<()>) + Send + 'static,
    {
        let client = self.clone();
        let id = id.to_string();
        tokio::spawn(async move { completion(client.delete_task_by_id(&id).await) })
    }
}

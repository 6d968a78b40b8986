//! Shared fakes for workflow tests.

#![allow(dead_code)]

use platform_cli::api::{ApiResponseError, RequestError, RequestExecutor, RequestOptions};
use platform_cli::promote::LinkStyle;
use platform_cli::Console;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

pub const APP_ID: u64 = 42;
pub const APP_TITLE: &str = "Contacts Sync";
pub const VERSION: &str = "1.0.1";

type Responder = Box<dyn Fn() -> Result<Value, RequestError> + Send + Sync>;

/// One request seen by [`FakeExecutor`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
    pub require_auth: bool,
}

/// In-memory executor answering from a route table
#[derive(Default)]
pub struct FakeExecutor {
    routes: HashMap<String, Responder>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor for a linked app whose credential check and lookup succeed
    pub fn linked_app(
        promote: impl Fn() -> Result<Value, RequestError> + Send + Sync + 'static,
    ) -> Self {
        Self::new()
            .route("GET", "/check", || Ok(json!({"user": "dev@example.com"})))
            .route("GET", &format!("/apps/{APP_ID}"), || {
                Ok(json!({"id": APP_ID, "title": APP_TITLE, "key": "App42"}))
            })
            .route("PUT", &promote_path(), promote)
    }

    pub fn route(
        mut self,
        method: &str,
        path: &str,
        responder: impl Fn() -> Result<Value, RequestError> + Send + Sync + 'static,
    ) -> Self {
        self.routes.insert(format!("{method} {path}"), Box::new(responder));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn promote_requests(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.method == "PUT")
            .collect()
    }
}

impl RequestExecutor for FakeExecutor {
    async fn request(&self, path: &str, options: RequestOptions) -> Result<Value, RequestError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: options.method.to_string(),
            path: path.to_string(),
            body: options.body.clone(),
            require_auth: options.require_auth,
        });

        match self.routes.get(&format!("{} {}", options.method, path)) {
            Some(responder) => responder(),
            None => Err(rejection(404, Some(json!({"detail": "Not found."})), Some("Not found."))),
        }
    }
}

pub fn promote_path() -> String {
    format!("/apps/{APP_ID}/versions/{VERSION}/promote/production")
}

/// A non-2xx answer from the promote endpoint
pub fn rejection(status: u16, json: Option<Value>, err_text: Option<&str>) -> RequestError {
    RequestError::Response(rejected_response(status, json, err_text))
}

pub fn rejected_response(status: u16, json: Option<Value>, err_text: Option<&str>) -> ApiResponseError {
    ApiResponseError {
        url: format!("https://platform.example.com/api/platform/cli{}", promote_path()),
        status,
        json,
        err_text: err_text.map(str::to_string),
    }
}

/// Console recording everything in order, answering prompts with a fixed reply
pub struct RecordingConsole {
    answer: bool,
    events: Mutex<Vec<String>>,
}

impl RecordingConsole {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| event.strip_prefix("confirm: ").map(str::to_string))
            .collect()
    }

    pub fn output(&self) -> String {
        self.events().join("\n")
    }

    pub fn position(&self, needle: &str) -> Option<usize> {
        self.events().iter().position(|event| event.contains(needle))
    }

    fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl Console for RecordingConsole {
    fn println(&self, message: &str) {
        self.record(format!("println: {message}"));
    }

    fn info(&self, message: &str) {
        self.record(format!("info: {message}"));
    }

    fn success(&self, message: &str) {
        self.record(format!("success: {message}"));
    }

    fn warn(&self, message: &str) {
        self.record(format!("warn: {message}"));
    }

    fn confirm(&self, prompt: &str) -> std::io::Result<bool> {
        self.record(format!("confirm: {prompt}"));
        Ok(self.answer)
    }

    fn start_progress(&self, label: &str) {
        self.record(format!("progress-start: {label}"));
    }

    fn stop_progress(&self) {
        self.record("progress-stop".to_string());
    }

    fn link_style(&self) -> LinkStyle {
        LinkStyle::Plain
    }
}

/// Write the linked-app file into `dir`
pub fn link_project(dir: &Path) {
    std::fs::write(
        dir.join(".platformapprc"),
        format!(r#"{{"id": {APP_ID}, "key": "App42"}}"#),
    )
    .expect("Failed to write linked app file");
}

/// Write a changelog with an entry for [`VERSION`]
pub fn write_changelog(dir: &Path) {
    std::fs::write(
        dir.join("CHANGELOG.md"),
        format!("# Changelog\n\n## {VERSION}\n\n* Contacts can be searched by email.\n\n## 1.0.0\n\n* Initial release.\n"),
    )
    .expect("Failed to write changelog");
}

//! Resolution of the app linked to a project directory.

use crate::api::{RequestExecutor, RequestOptions};
use crate::error::{LinkError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// File in the project directory recording which app it belongs to
pub const LINKED_APP_FILE: &str = ".platformapprc";

/// App identifier as stored by the service, numeric or textual
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AppId {
    /// Numeric id
    Number(u64),
    /// Opaque string id
    Text(String),
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppId::Number(id) => write!(f, "{id}"),
            AppId::Text(id) => f.write_str(id),
        }
    }
}

/// App linked to the current project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppContext {
    /// Service-side app id
    pub id: AppId,
    /// Human readable app title
    pub title: String,
}

#[derive(Debug, Deserialize)]
struct LinkedAppFile {
    id: AppId,
}

/// Read the app id recorded in the project directory
pub fn linked_app_id(project_dir: &Path) -> Result<AppId> {
    let path = project_dir.join(LINKED_APP_FILE);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(LinkError::NotLinked {
                dir: project_dir.to_path_buf(),
            }
            .into());
        }
        Err(e) => return Err(e.into()),
    };

    let linked: LinkedAppFile =
        serde_json::from_str(&content).map_err(|e| LinkError::Malformed {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    Ok(linked.id)
}

/// Look up the linked app's identity on the service
pub async fn linked_app<E: RequestExecutor>(executor: &E, project_dir: &Path) -> Result<AppContext> {
    let id = linked_app_id(project_dir)?;
    log::debug!("Project {} is linked to app {}", project_dir.display(), id);

    let record: Value = executor
        .request(&format!("/apps/{id}"), RequestOptions::get())
        .await?;

    serde_json::from_value(record).map_err(|e| {
        LinkError::UnexpectedRecord {
            id: id.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

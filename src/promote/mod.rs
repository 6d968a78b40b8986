//! Promotion of an uploaded version to production.
//!
//! The workflow runs strictly in order: credential check, changelog lookup,
//! confirmation, app lookup, promotion request, outcome report. Each stage waits
//! for the previous one and nothing is retried.

mod issues;
mod outcome;

pub use issues::{FAILURE_PREAMBLE, Issue, LinkStyle, ValidationErrors, flatten};
pub use outcome::PromotionOutcome;

use crate::api::{RequestExecutor, RequestOptions};
use crate::auth::check_credentials;
use crate::changelog::version_changelog;
use crate::console::{Console, ProgressGuard};
use crate::error::{CliError, PromoteError, Result};
use crate::link::{AppId, linked_app};
use serde::Serialize;
use std::path::Path;

/// Example of the expected changelog layout
pub const CHANGELOG_FORMAT_URL: &str = "https://keepachangelog.com/en/1.1.0/";

/// Prompt shown when a changelog entry was found
pub const CONFIRM_WITH_CHANGELOG: &str = "Would you like to continue promoting with this changelog?";

/// Prompt shown when no changelog entry was found
pub const CONFIRM_WITHOUT_CHANGELOG: &str =
    "Would you like to continue promoting without a changelog?";

/// Hint printed after a successful promotion
pub const MIGRATE_HINT: &str =
    "Optionally, run the `platform migrate` command to move users to this version.";

const CHANGELOG_SEPARATOR: &str = "---";

/// Behavior switches for one promotion
#[derive(Debug, Clone, Copy, Default)]
pub struct PromoteOptions {
    /// Skip the trailing `migrate` hint, for callers that run their own follow-up
    pub suppress_migrate_hint: bool,
}

/// Body of the promotion request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PromotionRequestBody {
    /// Changelog text, omitted from the JSON when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changelog: Option<String>,
}

/// API path that promotes `version` of `app_id`
pub fn promotion_path(app_id: &AppId, version: &str) -> String {
    format!("/apps/{app_id}/versions/{version}/promote/production")
}

/// Runs the promotion workflow against an executor and a console
pub struct Promoter<'a, E, C: ?Sized> {
    executor: &'a E,
    console: &'a C,
    project_dir: &'a Path,
    options: PromoteOptions,
}

impl<'a, E, C> Promoter<'a, E, C>
where
    E: RequestExecutor,
    C: Console + ?Sized,
{
    /// Create a promoter for the project in `project_dir`
    pub fn new(
        executor: &'a E,
        console: &'a C,
        project_dir: &'a Path,
        options: PromoteOptions,
    ) -> Self {
        Self {
            executor,
            console,
            project_dir,
            options,
        }
    }

    /// Promote `version` to production.
    ///
    /// Returns [`PromotionOutcome::Success`] or [`PromotionOutcome::PendingActivation`];
    /// every other outcome is returned as an error. Declining the confirmation yields
    /// [`PromoteError::Cancelled`] before any request touches the version.
    pub async fn promote(&self, version: &str) -> Result<PromotionOutcome> {
        let version = version.trim();
        if version.is_empty() {
            return Err(CliError::InvalidArguments {
                reason: "A version to promote is required".to_string(),
            }
            .into());
        }

        check_credentials(self.executor).await?;

        let changelog = version_changelog(self.project_dir, version)?;
        self.confirm_changelog(version, changelog.as_deref())?;

        let app = linked_app(self.executor, self.project_dir).await?;
        self.console.info(&format!(
            "Preparing to promote version {version} of your app \"{}\".",
            app.title
        ));

        let body = PromotionRequestBody { changelog };
        let outcome = self.request_promotion(&app.id, version, &body).await?;
        self.report(outcome)
    }

    fn confirm_changelog(&self, version: &str, changelog: Option<&str>) -> Result<()> {
        let prompt = match changelog {
            Some(text) => {
                self.console
                    .success(&format!("Changelog found for {version}!"));
                self.console.println(&format!(
                    "\n{CHANGELOG_SEPARATOR}\n{text}\n{CHANGELOG_SEPARATOR}\n"
                ));
                CONFIRM_WITH_CHANGELOG
            }
            None => {
                self.console.warn(&format!(
                    "Warning! Changelog not found. Please create a CHANGELOG.md file in a format similar to {CHANGELOG_FORMAT_URL} with user-facing descriptions."
                ));
                CONFIRM_WITHOUT_CHANGELOG
            }
        };

        if self.console.confirm(prompt)? {
            Ok(())
        } else {
            log::info!("Promotion of {version} declined at confirmation");
            Err(PromoteError::Cancelled)
        }
    }

    async fn request_promotion(
        &self,
        app_id: &AppId,
        version: &str,
        body: &PromotionRequestBody,
    ) -> Result<PromotionOutcome> {
        let path = promotion_path(app_id, version);
        let options = RequestOptions::put(Some(serde_json::to_value(body)?));

        let progress = ProgressGuard::start(self.console, &format!("Verifying and promoting {version}"));
        let result = self.executor.request(&path, options).await;
        progress.finish();

        Ok(PromotionOutcome::from_result(result))
    }

    fn report(&self, outcome: PromotionOutcome) -> Result<PromotionOutcome> {
        match outcome {
            PromotionOutcome::Success => {
                log::info!("Promotion accepted");
                self.console.success("  Promotion successful!");
                if !self.options.suppress_migrate_hint {
                    self.console.println(MIGRATE_HINT);
                }
                Ok(PromotionOutcome::Success)
            }
            PromotionOutcome::PendingActivation { activation_url } => {
                log::info!("Promotion pending public activation");
                self.console.success("Good news! Your app passes validation.");
                self.console.println(&format!(
                    "The next step is to visit {activation_url} to request public activation of your app."
                ));
                Ok(PromotionOutcome::PendingActivation { activation_url })
            }
            PromotionOutcome::ValidationFailure { errors } => Err(PromoteError::Validation {
                message: errors.render(self.console.link_style()),
            }),
            PromotionOutcome::TransportFailure { message } => {
                Err(PromoteError::Transport { message })
            }
            PromotionOutcome::Unrecognized(error) => Err(PromoteError::Request(error)),
        }
    }
}

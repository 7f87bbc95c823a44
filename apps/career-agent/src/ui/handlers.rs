//! HTML page handlers. Each action loads the visitor's session, runs at most
//! one collaborator call, and re-renders. Collaborator failures become an
//! error banner on the page; they never escape as a bare error response.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{Html, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::advisor::{enhance_text, predict_role};
use crate::errors::AppError;
use crate::matching::fetch_jobs;
use crate::matching::skills::skill_query;
use crate::resume::build_resume_pdf;
use crate::resume::form::read_submission;
use crate::resume::handlers::pdf_attachment;
use crate::session::store::CurrentSession;
use crate::session::Page;
use crate::state::AppState;
use crate::ui::layout::render_document;
use crate::ui::pages::{Flash, Outcome, PageView};

#[derive(Debug, Deserialize)]
pub struct SkillsForm {
    #[serde(default)]
    pub skills: String,
}

#[derive(Debug, Deserialize)]
pub struct TextForm {
    #[serde(default)]
    pub text: String,
}

async fn render(
    state: &AppState,
    current: CurrentSession,
    status: StatusCode,
    flash: Option<Flash>,
    outcome: Outcome,
) -> Result<Response, AppError> {
    let view = PageView {
        session: &current.session,
        flash,
        outcome,
    };
    let html = render_document(&view);
    current.commit(&state.sessions, (status, Html(html))).await
}

async fn render_failure(
    state: &AppState,
    current: CurrentSession,
    err: AppError,
    outcome: Outcome,
) -> Result<Response, AppError> {
    warn!(page = %current.session.page, code = err.code(), "Page action failed: {err}");
    let status = err.status();
    let flash = Flash::error(err.user_message());
    render(state, current, status, Some(flash), outcome).await
}

/// GET /
pub async fn handle_index(
    State(state): State<AppState>,
    current: CurrentSession,
) -> Result<Response, AppError> {
    render(&state, current, StatusCode::OK, None, Outcome::Empty).await
}

/// POST /nav/:page
pub async fn handle_navigate(
    State(state): State<AppState>,
    mut current: CurrentSession,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let page: Page = slug.parse()?;
    current.session.navigate(page);
    current.commit(&state.sessions, Redirect::to("/")).await
}

/// POST /theme/toggle
pub async fn handle_toggle_theme(
    State(state): State<AppState>,
    mut current: CurrentSession,
) -> Result<Response, AppError> {
    current.session.toggle_theme();
    current.commit(&state.sessions, Redirect::to("/")).await
}

/// POST /jobs
pub async fn handle_find_jobs(
    State(state): State<AppState>,
    mut current: CurrentSession,
    Form(form): Form<SkillsForm>,
) -> Result<Response, AppError> {
    current.session.navigate(Page::Jobs);
    current.session.remember_skills(&form.skills);

    if skill_query(&form.skills).is_empty() {
        let flash = Flash::info("Enter at least one skill to find matches.");
        return render(&state, current, StatusCode::OK, Some(flash), Outcome::Empty).await;
    }

    match fetch_jobs(state.jobs.as_ref(), &form.skills, state.rank_options()).await {
        Ok(jobs) => {
            info!(matches = jobs.len(), "Job search completed");
            let flash = Flash::success(format!("Found {} matches!", jobs.len()));
            render(&state, current, StatusCode::OK, Some(flash), Outcome::Jobs(jobs)).await
        }
        // Degrade to zero results.
        Err(e) => render_failure(&state, current, e, Outcome::Jobs(Vec::new())).await,
    }
}

/// POST /predict
pub async fn handle_predict(
    State(state): State<AppState>,
    mut current: CurrentSession,
    Form(form): Form<SkillsForm>,
) -> Result<Response, AppError> {
    current.session.navigate(Page::Predict);
    current.session.remember_skills(&form.skills);

    match predict_role(state.advisor.as_ref(), &form.skills).await {
        Ok(role) => {
            render(&state, current, StatusCode::OK, None, Outcome::Prediction(role)).await
        }
        Err(e) => render_failure(&state, current, e, Outcome::Empty).await,
    }
}

/// POST /ai-fix
pub async fn handle_ai_fix(
    State(state): State<AppState>,
    mut current: CurrentSession,
    Form(form): Form<TextForm>,
) -> Result<Response, AppError> {
    current.session.navigate(Page::AiFix);

    match enhance_text(state.advisor.as_ref(), &form.text).await {
        Ok(improved) => {
            let outcome = Outcome::Refined {
                original: form.text,
                improved: Some(improved),
            };
            render(&state, current, StatusCode::OK, None, outcome).await
        }
        Err(e) => {
            let outcome = Outcome::Refined {
                original: form.text,
                improved: None,
            };
            render_failure(&state, current, e, outcome).await
        }
    }
}

/// POST /build-cv
///
/// Answers with the PDF as a download on success, or the form with a banner.
pub async fn handle_build_cv(
    State(state): State<AppState>,
    mut current: CurrentSession,
    multipart: Multipart,
) -> Result<Response, AppError> {
    current.session.navigate(Page::BuildCv);

    let submission = match read_submission(multipart, state.config.max_photo_bytes).await {
        Ok(submission) => submission,
        Err(e) => return render_failure(&state, current, e, Outcome::Empty).await,
    };

    current.session.remember_skills(&submission.form.skills);
    let draft = submission.form.clone();

    match build_resume_pdf(&state.config.upload_dir, submission).await {
        Ok(bytes) => current.commit(&state.sessions, pdf_attachment(bytes)).await,
        Err(e) => render_failure(&state, current, e, Outcome::ResumeDraft(draft)).await,
    }
}

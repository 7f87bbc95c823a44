//! Page bodies. `render_body` is the dispatch from `Page` to its renderer.

use crate::matching::scorer::JobPosting;
use crate::resume::form::ResumeForm;
use crate::session::{Page, Session};
use crate::ui::layout::html_escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
    Info,
}

impl FlashKind {
    fn class(self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
            FlashKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Info,
            message: message.into(),
        }
    }
}

/// What the last page action produced, if anything.
#[derive(Debug, Clone, Default)]
pub enum Outcome {
    #[default]
    Empty,
    Jobs(Vec<JobPosting>),
    Prediction(String),
    Refined {
        original: String,
        improved: Option<String>,
    },
    /// Resume fields echoed back after a failed submission.
    ResumeDraft(ResumeForm),
}

pub struct PageView<'a> {
    pub session: &'a Session,
    pub flash: Option<Flash>,
    pub outcome: Outcome,
}

impl<'a> PageView<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            flash: None,
            outcome: Outcome::Empty,
        }
    }

    pub fn with_flash(mut self, flash: Flash) -> Self {
        self.flash = Some(flash);
        self
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }
}

pub fn render_body(view: &PageView<'_>) -> String {
    let body = match view.session.page {
        Page::Home => home(),
        Page::BuildCv => build_cv(view),
        Page::Predict => predict(view),
        Page::Jobs => jobs(view),
        Page::AiFix => ai_fix(view),
    };

    match &view.flash {
        Some(flash) => format!(
            r#"<div class="flash {}">{}</div>{body}"#,
            flash.kind.class(),
            html_escape(&flash.message)
        ),
        None => body,
    }
}

fn nav_button(page: Page, label: &str, class: &str) -> String {
    format!(
        r#"<form method="post" action="/nav/{slug}"><button type="submit" class="{class}">{label}</button></form>"#,
        slug = page.slug(),
    )
}

fn feature_card(title: &str, text: &str) -> String {
    format!(r#"<div class="job-card"><h3>{title}</h3><p>{text}</p></div>"#)
}

fn home() -> String {
    format!(
        r#"<div class="hero-box"><h1>Intelligent Career Guidance</h1><p>Optimize your resume, predict your career path, and find your dream job with AI.</p></div>
{start}
<hr>
<h3>Features</h3>
<div class="features">{c1}{c2}{c3}</div>"#,
        start = nav_button(Page::BuildCv, "🚀 Start Building Your Resume Now", "primary"),
        c1 = feature_card(
            "🔮 Smart Prediction",
            "AI analyzes your skills to suggest the perfect career path."
        ),
        c2 = feature_card(
            "🎯 Precision Matching",
            "Get jobs ranked by how well they match your actual resume."
        ),
        c3 = feature_card(
            "✨ AI Enhancement",
            "Turn weak bullet points into powerful success stories."
        ),
    )
}

fn text_input(name: &str, label: &str, value: &str) -> String {
    format!(
        r#"<label for="{name}">{label}</label><input type="text" id="{name}" name="{name}" value="{value}">"#,
        value = html_escape(value),
    )
}

fn text_area(name: &str, label: &str, value: &str) -> String {
    format!(
        r#"<label for="{name}">{label}</label><textarea id="{name}" name="{name}">{value}</textarea>"#,
        value = html_escape(value),
    )
}

fn build_cv(view: &PageView<'_>) -> String {
    let draft = match &view.outcome {
        Outcome::ResumeDraft(form) => form.clone(),
        _ => ResumeForm {
            skills: view.session.skills_or_empty().to_string(),
            ..Default::default()
        },
    };

    format!(
        r#"<h1>📝 Resume Builder</h1>
<form method="post" action="/build-cv" enctype="multipart/form-data">
<div class="grid">
<div>{name}{email}</div>
<div>{role}{phone}</div>
</div>
{linkedin}
<label for="photo">Photo</label><input type="file" id="photo" name="photo" accept=".jpg,.jpeg,.png,image/jpeg,image/png">
{skills}
{summary}{experience}{education}
<button type="submit" class="primary">Generate PDF</button>
</form>"#,
        name = text_input("name", "Name", &draft.name),
        role = text_input("role", "Target Role", &draft.role),
        email = text_input("email", "Email", &draft.email),
        phone = text_input("phone", "Phone", &draft.phone),
        linkedin = text_input("linkedin", "LinkedIn", &draft.linkedin),
        skills = text_input("skills", "Skills (e.g. Python, SQL)", &draft.skills),
        summary = text_area("summary", "Summary", &draft.summary),
        experience = text_area("experience", "Experience", &draft.experience),
        education = text_area("education", "Education", &draft.education),
    )
}

fn skills_form(action: &str, button: &str, skills: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">{input}<button type="submit" class="primary">{button}</button></form>"#,
        input = text_input("skills", "Enter Skills", skills),
    )
}

fn predict(view: &PageView<'_>) -> String {
    let mut body = format!(
        "<h1>🔮 Career Predictor</h1>{}",
        skills_form("/predict", "Predict Role", view.session.skills_or_empty())
    );
    if let Outcome::Prediction(role) = &view.outcome {
        body.push_str(&format!(
            r#"<div class="flash success">Recommended Role: <strong>{}</strong></div>"#,
            html_escape(role)
        ));
    }
    body
}

fn job_card(job: &JobPosting) -> String {
    format!(
        r#"<div class="job-card">
<h3>{title} <span class="match-tag">{score}% Match</span></h3>
<p><strong>{company}</strong> | 📍 {location} | 💰 {salary}</p>
<p>{description}</p>
<small>Type: {job_type}{matched}</small>
</div>"#,
        title = html_escape(&job.title),
        score = job.score,
        company = html_escape(&job.company),
        location = html_escape(&job.location),
        salary = html_escape(&job.salary),
        description = html_escape(&job.description),
        job_type = html_escape(&job.job_type),
        matched = if job.matched_skills.is_empty() {
            String::new()
        } else {
            format!(" | Matched: {}", html_escape(&job.matched_skills.join(", ")))
        },
    )
}

fn jobs(view: &PageView<'_>) -> String {
    let mut body = format!(
        "<h1>🎯 Job Matcher</h1>{}",
        skills_form("/jobs", "Find Matches", view.session.skills_or_empty())
    );
    if let Outcome::Jobs(jobs) = &view.outcome {
        for job in jobs {
            body.push_str(&job_card(job));
        }
    }
    body
}

fn ai_fix(view: &PageView<'_>) -> String {
    let (original, improved) = match &view.outcome {
        Outcome::Refined { original, improved } => (original.as_str(), improved.as_deref()),
        _ => ("", None),
    };

    let mut body = format!(
        r#"<h1>✨ AI Enhancer</h1><form method="post" action="/ai-fix">{}<button type="submit" class="primary">Enhance</button></form>"#,
        text_area("text", "Weak Text (e.g. 'I did sales')", original)
    );
    if let Some(improved) = improved {
        body.push_str(&text_area("improved", "Improved Version", improved));
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{job_row, sample_form};
    use crate::matching::scorer::score_posting;
    use crate::matching::skills::skill_query;

    fn session_on(page: Page) -> Session {
        Session {
            page,
            ..Default::default()
        }
    }

    #[test]
    fn test_dispatch_renders_each_page_title() {
        let expected = [
            (Page::Home, "Intelligent Career Guidance"),
            (Page::BuildCv, "Resume Builder"),
            (Page::Predict, "Career Predictor"),
            (Page::Jobs, "Job Matcher"),
            (Page::AiFix, "AI Enhancer"),
        ];
        for (page, title) in expected {
            let session = session_on(page);
            let html = render_body(&PageView::new(&session));
            assert!(html.contains(title), "{page:?} missing {title}");
        }
    }

    #[test]
    fn test_jobs_page_prefills_session_skills() {
        let mut session = session_on(Page::Jobs);
        session.remember_skills("Python, SQL");
        let html = render_body(&PageView::new(&session));
        assert!(html.contains(r#"value="Python, SQL""#));
    }

    #[test]
    fn test_job_cards_are_escaped() {
        let session = session_on(Page::Jobs);
        let mut row = job_row("<script>alert(1)</script>", "Acme", &["Rust"]);
        row.description = "Fast & fun".to_string();
        let posting = score_posting(&row, &skill_query("rust"));
        let html = render_body(
            &PageView::new(&session).with_outcome(Outcome::Jobs(vec![posting])),
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Fast &amp; fun"));
        assert!(html.contains("100% Match"));
    }

    #[test]
    fn test_flash_is_rendered_above_body() {
        let session = session_on(Page::Predict);
        let html = render_body(
            &PageView::new(&session).with_flash(Flash::error("AI is down")),
        );
        assert!(html.starts_with(r#"<div class="flash error">AI is down</div>"#));
    }

    #[test]
    fn test_build_cv_echoes_draft_after_failure() {
        let session = session_on(Page::BuildCv);
        let html = render_body(
            &PageView::new(&session).with_outcome(Outcome::ResumeDraft(sample_form())),
        );
        assert!(html.contains(r#"value="Ada Lovelace""#));
    }

    #[test]
    fn test_ai_fix_shows_improved_version() {
        let session = session_on(Page::AiFix);
        let html = render_body(&PageView::new(&session).with_outcome(Outcome::Refined {
            original: "I did sales".to_string(),
            improved: Some("Grew regional sales".to_string()),
        }));
        assert!(html.contains("Improved Version"));
        assert!(html.contains("Grew regional sales"));
        assert!(html.contains(">I did sales</textarea>"));
    }
}

pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{advisor, matching, resume, ui};

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes();

    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(ui::handlers::handle_index))
        .route("/nav/:page", post(ui::handlers::handle_navigate))
        .route("/theme/toggle", post(ui::handlers::handle_toggle_theme))
        .route("/jobs", post(ui::handlers::handle_find_jobs))
        .route("/predict", post(ui::handlers::handle_predict))
        .route("/ai-fix", post(ui::handlers::handle_ai_fix))
        .route("/build-cv", post(ui::handlers::handle_build_cv))
        // JSON API
        .route(
            "/api/v1/jobs/match",
            post(matching::handlers::handle_match_jobs),
        )
        .route(
            "/api/v1/career/predict",
            post(advisor::handlers::handle_predict),
        )
        .route(
            "/api/v1/resume/refine",
            post(advisor::handlers::handle_refine),
        )
        .route(
            "/api/v1/resume/pdf",
            post(resume::handlers::handle_render_pdf),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::session::store::SESSION_COOKIE;
    use crate::test_support::{
        job_row, test_state, FailingJobSource, StaticJobSource, StubAdvisor, TINY_PNG,
    };

    const BOUNDARY: &str = "career-agent-test-boundary";

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    fn session_cookie(response: &Response) -> String {
        response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .expect("response sets the session cookie")
            .to_string()
    }

    fn post_form(uri: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::post(uri).header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        );
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get_index(cookie: &str) -> Request<Body> {
        Request::get("/")
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap()
    }

    fn post_json(uri: &str, value: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap()
    }

    fn multipart_body(fields: &[(&str, &str)], photo: Option<&[u8]>) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some(photo) = photo {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"photo\"; filename=\"me.png\"\r\nContent-Type: image/png\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(photo);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn post_multipart(uri: &str, cookie: Option<&str>, body: Vec<u8>) -> Request<Body> {
        let mut builder = Request::post(uri).header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (state, _dir) = test_state(StaticJobSource::new(vec![]), StubAdvisor::default());
        let response = build_router(state)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let value: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["service"], "career-agent");
    }

    #[tokio::test]
    async fn test_first_visit_renders_home_and_sets_cookie() {
        let (state, _dir) = test_state(StaticJobSource::new(vec![]), StubAdvisor::default());
        let response = build_router(state)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(session_cookie(&response).starts_with(SESSION_COOKIE));
        assert!(body_string(response).await.contains("Intelligent Career Guidance"));
    }

    #[tokio::test]
    async fn test_navigation_redirects_and_persists_page() {
        let (state, _dir) = test_state(StaticJobSource::new(vec![]), StubAdvisor::default());
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(post_form("/nav/predict", None, ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        let cookie = session_cookie(&response);

        let response = app.oneshot(get_index(&cookie)).await.unwrap();
        assert!(body_string(response).await.contains("Career Predictor"));
    }

    #[tokio::test]
    async fn test_unknown_page_is_404() {
        let (state, _dir) = test_state(StaticJobSource::new(vec![]), StubAdvisor::default());
        let response = build_router(state)
            .oneshot(post_form("/nav/admin", None, ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_theme_toggle_twice_restores_light() {
        let (state, _dir) = test_state(StaticJobSource::new(vec![]), StubAdvisor::default());
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(post_form("/theme/toggle", None, ""))
            .await
            .unwrap();
        let cookie = session_cookie(&response);
        let html = body_string(app.clone().oneshot(get_index(&cookie)).await.unwrap()).await;
        assert!(html.contains("☀️ Light Mode"));

        app.clone()
            .oneshot(post_form("/theme/toggle", Some(&cookie), ""))
            .await
            .unwrap();
        let html = body_string(app.oneshot(get_index(&cookie)).await.unwrap()).await;
        assert!(html.contains("🌙 Dark Mode"));
    }

    #[tokio::test]
    async fn test_skills_from_build_cv_survive_navigation_to_jobs_and_home() {
        let (state, dir) = test_state(StaticJobSource::new(vec![]), StubAdvisor::default());
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(post_form("/nav/build-cv", None, ""))
            .await
            .unwrap();
        let cookie = session_cookie(&response);

        let body = multipart_body(&[("name", "Ada Lovelace"), ("skills", "Python, SQL")], None);
        let response = app
            .clone()
            .oneshot(post_multipart("/build-cv", Some(&cookie), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");

        for page in ["jobs", "home"] {
            app.clone()
                .oneshot(post_form(&format!("/nav/{page}"), Some(&cookie), ""))
                .await
                .unwrap();
        }
        app.clone()
            .oneshot(post_form("/nav/jobs", Some(&cookie), ""))
            .await
            .unwrap();
        let html = body_string(app.oneshot(get_index(&cookie)).await.unwrap()).await;
        assert!(html.contains(r#"value="Python, SQL""#));
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[tokio::test]
    async fn test_build_cv_with_photo_returns_pdf_and_cleans_up() {
        let (state, dir) = test_state(StaticJobSource::new(vec![]), StubAdvisor::default());
        let body = multipart_body(&[("name", "Ada Lovelace")], Some(TINY_PNG));
        let response = build_router(state)
            .oneshot(post_multipart("/build-cv", None, body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"resume.pdf\""
        );
        assert!(body_string(response).await.starts_with("%PDF"));
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[tokio::test]
    async fn test_build_cv_without_name_shows_banner_and_keeps_draft() {
        let (state, _dir) = test_state(StaticJobSource::new(vec![]), StubAdvisor::default());
        let body = multipart_body(&[("role", "Analyst"), ("skills", "SQL")], None);
        let response = build_router(state)
            .oneshot(post_multipart("/build-cv", None, body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_string(response).await;
        assert!(html.contains("Name is required."));
        assert!(html.contains(r#"value="Analyst""#));
    }

    #[tokio::test]
    async fn test_find_jobs_renders_ranked_cards() {
        let source = StaticJobSource::new(vec![
            job_row("Backend Engineer", "Ferrous", &["Rust", "SQL"]),
            job_row("Data Analyst", "Northwind", &["Python", "SQL"]),
            job_row("Designer", "Pixel", &["Figma"]),
        ]);
        let (state, _dir) = test_state(source, StubAdvisor::default());
        let response = build_router(state)
            .oneshot(post_form("/jobs", None, "skills=python%2C+sql"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Found 2 matches!"));
        let analyst = html.find("Data Analyst").unwrap();
        let backend = html.find("Backend Engineer").unwrap();
        assert!(analyst < backend);
        assert!(!html.contains("Designer"));
    }

    #[tokio::test]
    async fn test_find_jobs_degrades_when_source_is_down() {
        let (state, _dir) = test_state(FailingJobSource, StubAdvisor::default());
        let response = build_router(state)
            .oneshot(post_form("/jobs", None, "skills=Rust"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let html = body_string(response).await;
        assert!(html.contains("Job listings are unavailable"));
        assert!(html.contains("Job Matcher"));
        assert!(!html.contains("match-tag\">"));
    }

    #[tokio::test]
    async fn test_find_jobs_with_blank_skills_asks_for_input() {
        let (state, _dir) = test_state(FailingJobSource, StubAdvisor::default());
        let response = build_router(state)
            .oneshot(post_form("/jobs", None, "skills=+%2C+"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response)
            .await
            .contains("Enter at least one skill"));
    }

    #[tokio::test]
    async fn test_predict_page_shows_role_and_remembers_skills() {
        let (state, _dir) = test_state(StaticJobSource::new(vec![]), StubAdvisor::default());
        let app = build_router(state);
        let response = app
            .clone()
            .oneshot(post_form("/predict", None, "skills=Rust"))
            .await
            .unwrap();
        let cookie = session_cookie(&response);
        assert!(body_string(response)
            .await
            .contains("Recommended Role: <strong>Role for Rust</strong>"));

        app.clone()
            .oneshot(post_form("/nav/jobs", Some(&cookie), ""))
            .await
            .unwrap();
        let html = body_string(app.oneshot(get_index(&cookie)).await.unwrap()).await;
        assert!(html.contains(r#"value="Rust""#));
    }

    #[tokio::test]
    async fn test_ai_fix_failure_is_a_banner() {
        let (state, _dir) = test_state(StaticJobSource::new(vec![]), StubAdvisor::failing());
        let response = build_router(state)
            .oneshot(post_form("/ai-fix", None, "text=I+did+sales"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let html = body_string(response).await;
        assert!(html.contains("The AI service could not complete the request."));
        assert!(html.contains(">I did sales</textarea>"));
    }

    #[tokio::test]
    async fn test_api_match_jobs() {
        let source = StaticJobSource::new(vec![job_row("Data Analyst", "Northwind", &["Python", "SQL"])]);
        let (state, _dir) = test_state(source, StubAdvisor::default());
        let response = build_router(state)
            .oneshot(post_json("/api/v1/jobs/match", json!({"skills": "SQL"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let value: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["jobs"][0]["score"], 50);
        assert_eq!(value["jobs"][0]["missing_skills"], json!(["Python"]));
    }

    #[tokio::test]
    async fn test_api_match_jobs_source_down_is_503() {
        let (state, _dir) = test_state(FailingJobSource, StubAdvisor::default());
        let response = build_router(state)
            .oneshot(post_json("/api/v1/jobs/match", json!({"skills": "SQL"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let value: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(value["error"]["code"], "DATA_SOURCE_ERROR");
    }

    #[tokio::test]
    async fn test_api_predict_and_refine() {
        let (state, _dir) = test_state(StaticJobSource::new(vec![]), StubAdvisor::default());
        let app = build_router(state);

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/v1/career/predict",
                json!({"skills": ["Python", " ", "SQL"]}),
            ))
            .await
            .unwrap();
        let value: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(value["role"], "Role for Python+SQL");

        let response = app
            .oneshot(post_json("/api/v1/resume/refine", json!({"text": ""})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_api_render_pdf_rejects_non_image_photo() {
        let (state, dir) = test_state(StaticJobSource::new(vec![]), StubAdvisor::default());
        let body = multipart_body(&[("name", "Ada")], Some(b"GIF89a not allowed"));
        let response = build_router(state)
            .oneshot(post_multipart("/api/v1/resume/pdf", None, body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }
}

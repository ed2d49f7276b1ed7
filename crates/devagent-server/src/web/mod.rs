// ABOUTME: Web UI route handlers serving HTML via Askama templates and HTMX.
// ABOUTME: Renders task responses with the embedded mermaid block split out for the client.

use askama::Template;
use askama_derive_axum::IntoResponse as AskamaIntoResponse;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use devagent_core::{Role, split_mermaid};
use serde::Deserialize;

use crate::app_state::SharedState;

/// Maximum allowed length for a task description (in characters).
const TASK_MAX_LENGTH: usize = 10_000;

/// Render Markdown to HTML for embedding in a partial.
fn markdown_to_html(md: &str) -> String {
    let parser = pulldown_cmark::Parser::new(md);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

/// A response split for display: prose before the diagram, the raw mermaid
/// body (handed to mermaid.js verbatim), and prose after it.
pub struct RenderedResponse {
    pub lead_html: String,
    pub mermaid: Option<String>,
    pub rest_html: String,
}

/// Split a response around its first mermaid fence and render the prose
/// parts as HTML. Responses without a diagram render whole.
pub fn render_response(text: &str) -> RenderedResponse {
    match split_mermaid(text) {
        Some((lead, diagram, rest)) => RenderedResponse {
            lead_html: markdown_to_html(lead),
            mermaid: Some(diagram.to_string()),
            rest_html: markdown_to_html(rest.trim_start_matches('\n')),
        },
        None => RenderedResponse {
            lead_html: markdown_to_html(text),
            mermaid: None,
            rest_html: String::new(),
        },
    }
}

/// Capitalized role label for display.
fn role_display(role: Role) -> &'static str {
    match role {
        Role::Architect => "Architect",
        Role::Developer => "Developer",
        Role::Reviewer => "Reviewer",
    }
}

/// Index page with the task form, provider badge, and history.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

/// GET / - Render the main page.
pub async fn index() -> IndexTemplate {
    IndexTemplate {}
}

/// Form data for submitting a task.
#[derive(Deserialize)]
pub struct TaskForm {
    pub task: String,
    pub role: String,
}

/// Response partial: agent output for one submission.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "partials/response.html")]
pub struct ResponseTemplate {
    pub role_label: &'static str,
    pub task: String,
    pub lead_html: String,
    pub mermaid: Option<String>,
    pub rest_html: String,
}

/// POST /web/tasks - Process a task from form data, return the response partial.
pub async fn submit_task(
    State(state): State<SharedState>,
    Form(form): Form<TaskForm>,
) -> impl IntoResponse {
    let role: Role = match form.role.parse() {
        Ok(role) => role,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Html(format!("<p class=\"error-msg\">{e}</p>")),
            )
                .into_response();
        }
    };

    let task = form.task.trim().to_string();
    if task.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Html("<p class=\"error-msg\">Task cannot be empty.</p>".to_string()),
        )
            .into_response();
    }
    if task.chars().count() > TASK_MAX_LENGTH {
        return (
            StatusCode::BAD_REQUEST,
            Html(format!(
                "<p class=\"error-msg\">Task too long (max {TASK_MAX_LENGTH} characters).</p>"
            )),
        )
            .into_response();
    }

    let response = state.agent.process_task(&task, role).await;
    state
        .session
        .write()
        .await
        .append(role, task.clone(), response.clone());

    let rendered = render_response(&response);
    let template = ResponseTemplate {
        role_label: role_display(role),
        task,
        lead_html: rendered.lead_html,
        mermaid: rendered.mermaid,
        rest_html: rendered.rest_html,
    };

    // Tells the history panel to refresh itself.
    ([("HX-Trigger", "taskSubmitted")], template).into_response()
}

/// One history record for template rendering.
pub struct HistoryEntryView {
    pub role_label: &'static str,
    pub task: String,
    pub response: String,
    pub timestamp: String,
}

/// History partial: past submissions, newest first.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "partials/history.html")]
pub struct HistoryTemplate {
    pub entries: Vec<HistoryEntryView>,
}

/// GET /web/history - Render the history partial.
pub async fn history(State(state): State<SharedState>) -> HistoryTemplate {
    let session = state.session.read().await;
    let entries = session
        .newest_first()
        .map(|e| HistoryEntryView {
            role_label: role_display(e.role),
            task: e.task.clone(),
            response: e.response.clone(),
            timestamp: e.created_at.format("%H:%M:%S").to_string(),
        })
        .collect();
    HistoryTemplate { entries }
}

/// Provider info view for template rendering.
pub struct ProviderInfoView {
    pub name: String,
    pub configured: bool,
    pub model: String,
}

/// Provider status partial template.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "partials/provider_status.html")]
pub struct ProviderStatusTemplate {
    pub agent_kind: &'static str,
    pub default_provider: String,
    pub providers: Vec<ProviderInfoView>,
    pub any_available: bool,
}

/// GET /web/provider-status - Provider status partial.
pub async fn provider_status(State(state): State<SharedState>) -> ProviderStatusTemplate {
    let ps = &state.provider_status;
    ProviderStatusTemplate {
        agent_kind: state.agent.kind(),
        default_provider: ps.default_provider.clone(),
        providers: ps
            .providers
            .iter()
            .map(|p| ProviderInfoView {
                name: p.name.clone(),
                configured: p.configured,
                model: p.model.clone(),
            })
            .collect(),
        any_available: ps.any_available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::{AppState, TaskAgent};
    use crate::providers::ProviderStatus;
    use crate::routes::create_router;
    use axum::body::Body;
    use http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> SharedState {
        Arc::new(AppState::new(TaskAgent::Template, ProviderStatus::none()))
    }

    #[test]
    fn render_response_splits_around_mermaid() {
        let text = "# Head\n\n```mermaid\ngraph TD\n    A --> B\n```\n\nTail prose.";
        let rendered = render_response(text);
        assert!(rendered.lead_html.contains("<h1>"));
        assert_eq!(rendered.mermaid.as_deref(), Some("graph TD\n    A --> B"));
        assert!(rendered.rest_html.contains("Tail prose."));
    }

    #[test]
    fn render_response_without_diagram() {
        let rendered = render_response("Just **bold** prose.");
        assert!(rendered.lead_html.contains("<strong>bold</strong>"));
        assert!(rendered.mermaid.is_none());
        assert!(rendered.rest_html.is_empty());
    }

    #[test]
    fn index_template_renders() {
        let rendered = IndexTemplate {}.render().unwrap();
        assert!(rendered.contains("devagent"));
        assert!(rendered.contains("architect"));
        assert!(rendered.contains("developer"));
        assert!(rendered.contains("reviewer"));
    }

    #[test]
    fn response_template_renders_with_diagram() {
        let tmpl = ResponseTemplate {
            role_label: "Architect",
            task: "design a shop".to_string(),
            lead_html: "<h1>Design</h1>".to_string(),
            mermaid: Some("graph TD\n    A --> B".to_string()),
            rest_html: "<p>Notes</p>".to_string(),
        };
        let rendered = tmpl.render().unwrap();
        assert!(rendered.contains("Architect"));
        assert!(rendered.contains("class=\"mermaid\""));
        // Askama escapes `>` as a numeric entity; the browser decodes it
        // before mermaid.js reads the pre's textContent.
        assert!(rendered.contains("A --&#62; B"));
    }

    #[test]
    fn response_template_renders_without_diagram() {
        let tmpl = ResponseTemplate {
            role_label: "Reviewer",
            task: "check this".to_string(),
            lead_html: "<p>Feedback</p>".to_string(),
            mermaid: None,
            rest_html: String::new(),
        };
        let rendered = tmpl.render().unwrap();
        assert!(rendered.contains("Feedback"));
        assert!(!rendered.contains("class=\"mermaid\""));
    }

    #[test]
    fn history_template_renders_empty() {
        let rendered = HistoryTemplate { entries: vec![] }.render().unwrap();
        assert!(rendered.contains("No tasks yet"));
    }

    #[test]
    fn history_template_renders_entries() {
        let tmpl = HistoryTemplate {
            entries: vec![HistoryEntryView {
                role_label: "Developer",
                task: "write a parser".to_string(),
                response: "some code".to_string(),
                timestamp: "12:00:00".to_string(),
            }],
        };
        let rendered = tmpl.render().unwrap();
        assert!(rendered.contains("Developer"));
        assert!(rendered.contains("write a parser"));
    }

    #[test]
    fn provider_status_template_renders() {
        let tmpl = ProviderStatusTemplate {
            agent_kind: "template",
            default_provider: "huggingface".to_string(),
            providers: vec![ProviderInfoView {
                name: "huggingface".to_string(),
                configured: false,
                model: "mistralai/Mistral-7B-Instruct-v0.2".to_string(),
            }],
            any_available: false,
        };
        let rendered = tmpl.render().unwrap();
        assert!(rendered.contains("huggingface"));
        assert!(rendered.contains("template"));
    }

    #[tokio::test]
    async fn get_index_returns_html() {
        let app = create_router(test_state());

        let resp = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("devagent"));
    }

    #[tokio::test]
    async fn post_web_tasks_returns_response_partial() {
        let state = test_state();
        let app = create_router(Arc::clone(&state));

        let resp = app
            .oneshot(
                Request::post("/web/tasks")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from(
                        "task=Build+a+document+upload+API+with+user+login&role=architect",
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("class=\"mermaid\""));
        assert!(html.contains("Architect"));

        assert_eq!(state.session.read().await.len(), 1);
    }

    #[tokio::test]
    async fn successful_submit_triggers_history_refresh() {
        let app = create_router(test_state());

        let resp = app
            .oneshot(
                Request::post("/web/tasks")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from("task=inventory+service&role=reviewer"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);
        let trigger = resp
            .headers()
            .get("hx-trigger")
            .and_then(|v| v.to_str().ok());
        assert_eq!(trigger, Some("taskSubmitted"));
    }

    #[tokio::test]
    async fn rejected_submit_does_not_trigger_history_refresh() {
        let app = create_router(test_state());

        let resp = app
            .oneshot(
                Request::post("/web/tasks")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from("task=anything&role=manager"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), 400);
        assert!(resp.headers().get("hx-trigger").is_none());
    }

    #[tokio::test]
    async fn post_web_tasks_rejects_unknown_role() {
        let app = create_router(test_state());

        let resp = app
            .oneshot(
                Request::post("/web/tasks")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from("task=anything&role=manager"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), 400);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("invalid role"));
    }

    #[tokio::test]
    async fn post_web_tasks_rejects_empty_task() {
        let app = create_router(test_state());

        let resp = app
            .oneshot(
                Request::post("/web/tasks")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from("task=++&role=developer"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), 400);
    }

    #[tokio::test]
    async fn get_web_history_reflects_submissions() {
        let state = test_state();
        let app = create_router(Arc::clone(&state));

        let resp = app
            .clone()
            .oneshot(
                Request::post("/web/tasks")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from("task=simple+search+tool&role=developer"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let resp = app
            .oneshot(Request::get("/web/history").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("simple search tool"));
    }

    #[tokio::test]
    async fn get_provider_status_returns_partial() {
        let app = create_router(test_state());

        let resp = app
            .oneshot(
                Request::get("/web/provider-status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("template"));
    }
}

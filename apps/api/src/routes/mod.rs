pub mod health;

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::AppError;
use crate::form;
use crate::proposal::handlers;
use crate::proposal::request::LanguageMode;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Questionnaire pages
        .route("/", get(form::cooperation_page))
        .route("/offer", get(form::module_page))
        // Proposal API
        .route("/api/agent", post(handlers::handle_cooperation_proposal))
        .route("/api/offer", post(handlers::handle_module_proposal))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
}

/// Last-resort 500 for panics outside proposal generation. The request
/// language is unknown here, so the message is bilingual.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    AppError::Internal {
        message: handlers::panic_message(err.as_ref()),
        language: LanguageMode::Both,
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::{LlmError, TextGenerator};
    use crate::proposal::template::language_divider;

    /// Generator that always fails, counting how often it was asked.
    #[derive(Default)]
    struct DownGenerator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TextGenerator for DownGenerator {
        async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(LlmError::EmptyContent)
        }

        fn model(&self) -> &str {
            "down"
        }
    }

    /// Generator that panics mid-request.
    struct BrokenGenerator;

    #[async_trait]
    impl TextGenerator for BrokenGenerator {
        async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
            panic!("generator state corrupted");
        }

        fn model(&self) -> &str {
            "broken"
        }
    }

    fn app(llm: Option<Arc<dyn TextGenerator>>) -> Router {
        build_router(AppState {
            config: Config::local(),
            llm,
        })
    }

    async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_blank_company_is_rejected_before_generation() {
        let generator = Arc::new(DownGenerator::default());
        let router = app(Some(generator.clone()));

        let (status, body) = post_json(
            router,
            "/api/agent",
            json!({ "companyName": "   ", "languageMode": "en" }).to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Company name is required");
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cooperation_proposal_falls_back_to_template() {
        let generator = Arc::new(DownGenerator::default());
        let router = app(Some(generator.clone()));

        let (status, body) = post_json(
            router,
            "/api/agent",
            json!({
                "companyName": "Acme",
                "areasOfCooperation": ["materialy_marketingowe_ekskluzywne"],
                "languageMode": "en"
            })
            .to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let summary = body["summary"].as_str().unwrap();
        assert!(summary.contains("Acme"));
        assert!(summary.contains("RECOMMENDED VARIANT: BASIC"));
        assert_eq!(body["emailSent"], false);
        assert!(body.get("emailMessage").is_none());
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_both_languages_without_generator() {
        let (status, body) = post_json(
            app(None),
            "/api/agent",
            json!({ "companyName": "Acme", "languageMode": "both" }).to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let summary = body["summary"].as_str().unwrap();
        let divider = format!("\n\n{}\n", language_divider());
        let (pl, en) = summary.split_once(&divider).unwrap();
        assert!(pl.contains("REKOMENDOWANY WARIANT"));
        assert!(en.contains("RECOMMENDED VARIANT"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let (status, body) = post_json(app(None), "/api/agent", "{not json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Nieprawidłowe dane formularza / Invalid form data received"
        );
    }

    #[tokio::test]
    async fn test_offer_requires_contact_details() {
        let (status, body) = post_json(
            app(None),
            "/api/offer",
            json!({ "companyName": "Acme", "contactPerson": "Jan Kowalski" }).to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Adres e-mail jest wymagany");
    }

    #[tokio::test]
    async fn test_offer_reports_email_stub() {
        let (status, body) = post_json(
            app(None),
            "/api/offer",
            json!({
                "companyName": "Acme",
                "contactPerson": "Jan Kowalski",
                "contactEmail": "jan@acme.pl",
                "modules": ["strategie_marki", "wizualizacje_3d", "pr_publikacje"],
                "intensity": 40,
                "sendEmail": true
            })
            .to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["emailSent"], false);
        assert!(body["emailMessage"]
            .as_str()
            .unwrap()
            .contains("jan@acme.pl"));
        assert!(body["summary"]
            .as_str()
            .unwrap()
            .contains("REKOMENDOWANY WARIANT: PLUS"));
    }

    #[tokio::test]
    async fn test_pages_and_health() {
        let (status, page) = get_text(app(None), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(page.contains("/api/agent"));

        let (status, page) = get_text(app(None), "/offer?lang=en").await;
        assert_eq!(status, StatusCode::OK);
        assert!(page.contains("/api/offer"));
        assert!(page.contains(r#"lang="en""#));

        let (status, health) = get_text(app(None), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let health: Value = serde_json::from_str(&health).unwrap();
        assert_eq!(health["service"], "proposal-api");
        assert_eq!(health["generator"], "template");
    }

    #[tokio::test]
    async fn test_generation_panic_is_localized_server_error() {
        let (status, body) = post_json(
            app(Some(Arc::new(BrokenGenerator))),
            "/api/agent",
            json!({ "companyName": "Acme", "languageMode": "en" }).to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "Error generating proposal - please check your input"
        );

        let (status, body) = post_json(
            app(Some(Arc::new(BrokenGenerator))),
            "/api/agent",
            json!({ "companyName": "Acme" }).to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "Błąd podczas generowania propozycji - sprawdź wprowadzone dane"
        );
    }

    #[tokio::test]
    async fn test_panic_outside_generation_is_bilingual() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body["error"],
            "Błąd podczas generowania propozycji - sprawdź wprowadzone dane / \
             Error generating proposal - please check your input"
        );
    }

    #[tokio::test]
    async fn test_wrong_typed_fields_are_defaulted() {
        let (status, body) = post_json(
            app(None),
            "/api/offer",
            json!({
                "companyName": "Acme",
                "contactPerson": "Jan Kowalski",
                "contactEmail": "jan@acme.pl",
                "markets": "polska",
                "modules": ["strategie_marki", 7, null],
                "intensity": 55.5,
                "languageMode": "en"
            })
            .to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let summary = body["summary"].as_str().unwrap();
        assert!(summary.contains("Collaboration intensity: 56%"));
        assert!(summary.contains("RECOMMENDED VARIANT: BASIC"));
    }
}

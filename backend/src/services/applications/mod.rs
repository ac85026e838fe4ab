//! # Job Application Service Module
//!
//! Career-page intake under `/api/applynow`.
//!
//! ## Registered Routes:
//!
//! *   **`POST /api/applynow`** (`submit::process`): multipart form with `firstname`,
//!     `lastname`, `email`, `phone`, `address`, `city`, `country`, `message` and an
//!     optional `resume` file. Every text field is required. An email that already
//!     applied (compared case-insensitively) is rejected with
//!     `400 {"error": "Email already exists"}` and nothing is stored in the database.
//!
//! *   **`GET /api/applynow`** (`list::process`): every application, oldest first.
//!
//! *   **`GET /api/applynow/count`** (`count::process`): number of applications.

mod count;
mod list;
mod submit;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/applynow";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(submit::process))
        .route("", get().to(list::process))
        .route("/count", get().to(count::process))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{init_app, MultipartBody, TestContext};
    use actix_web::http::StatusCode;
    use actix_web::test::{self, TestRequest};
    use common::model::application::Application;
    use common::responses::{CountResponse, ErrorResponse, SubmissionResponse};

    fn application_form(email: &str) -> MultipartBody {
        MultipartBody::new()
            .text("firstname", "Ravi")
            .text("lastname", "Kumar")
            .text("email", email)
            .text("phone", "+91 98765 43210")
            .text("address", "12 MG Road")
            .text("city", "Pune")
            .text("country", "India")
            .text("message", "Interested in the firmware role")
    }

    fn post_form(body: MultipartBody) -> TestRequest {
        let (content_type, bytes) = body.finish();
        TestRequest::post()
            .uri("/api/applynow")
            .insert_header(("content-type", content_type))
            .set_payload(bytes)
    }

    macro_rules! application_count {
        ($app:expr) => {{
            let res: CountResponse = test::call_and_read_body_json(
                &$app,
                TestRequest::get().uri("/api/applynow/count").to_request(),
            )
            .await;
            res.count
        }};
    }

    #[actix_web::test]
    async fn duplicate_email_is_rejected_and_count_grows_by_one() {
        let ctx = TestContext::new();
        let app = init_app!(ctx);
        let before = application_count!(app);

        let req = post_form(application_form("ravi@example.com")).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let ack: SubmissionResponse = test::read_body_json(res).await;
        assert_eq!(ack.message, "Application submitted successfully!");
        assert!(ack.id > 0);

        let req = post_form(application_form("ravi@example.com")).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let err: ErrorResponse = test::read_body_json(res).await;
        assert_eq!(err.error, "Email already exists");

        assert_eq!(application_count!(app), before + 1);
    }

    #[actix_web::test]
    async fn resume_is_stored_and_listed() {
        let ctx = TestContext::new();
        let app = init_app!(ctx);

        let form = application_form("meera@example.com").file("resume", "cv.docx", b"resume");
        let res = test::call_service(&app, post_form(form).to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);

        let applications: Vec<Application> = test::call_and_read_body_json(
            &app,
            TestRequest::get().uri("/api/applynow").to_request(),
        )
        .await;
        let resume = applications[0].resume.clone().unwrap();
        assert!(resume.ends_with(".docx"));
        assert_eq!(ctx.stored_files(), vec![resume]);
    }

    #[actix_web::test]
    async fn missing_field_is_rejected_before_storing_the_resume() {
        let ctx = TestContext::new();
        let app = init_app!(ctx);

        let form = MultipartBody::new()
            .text("firstname", "Ravi")
            .text("email", "ravi@example.com")
            .file("resume", "cv.pdf", b"resume");
        let res = test::call_service(&app, post_form(form).to_request()).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let err: ErrorResponse = test::read_body_json(res).await;
        assert_eq!(err.error, "All fields are required");
        assert_eq!(application_count!(app), 0);
        assert!(ctx.stored_files().is_empty());
    }

    #[actix_web::test]
    async fn duplicate_with_resume_leaves_the_upload_behind() {
        let ctx = TestContext::new();
        let app = init_app!(ctx);

        let form = application_form("anil@example.com").file("resume", "cv.pdf", b"first");
        let res = test::call_service(&app, post_form(form).to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);

        let form = application_form("Anil@Example.com").file("resume", "cv.pdf", b"second");
        let res = test::call_service(&app, post_form(form).to_request()).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let err: ErrorResponse = test::read_body_json(res).await;
        assert_eq!(err.error, "Email already exists");

        assert_eq!(application_count!(app), 1);
        assert_eq!(ctx.stored_files().len(), 2);
    }
}

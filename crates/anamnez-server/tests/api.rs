use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use anamnez_questionnaire::definition::QuestionDefinition;
use anamnez_questionnaire::questionnaire::Questionnaire;
use anamnez_questionnaire::sections::demographics::{AGE, GENDER, NAME};
use anamnez_server::router;
use anamnez_server::session::SESSION_COOKIE;
use anamnez_server::state::{AppState, CookieSettings};
use anamnez_storage::memory::MemoryAnswerStore;

fn app_with(questionnaire: Questionnaire) -> Router {
    router(AppState::new(
        Arc::new(MemoryAnswerStore::new()),
        Arc::new(questionnaire),
    ))
}

fn app() -> Router {
    app_with(Questionnaire::builtin().unwrap())
}

async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.unwrap()
}

async fn body_bytes(resp: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(resp: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

/// The `name=value` pair of the session cookie set by a response.
fn issued_cookie(resp: &Response<Body>) -> String {
    let header = resp
        .headers()
        .get(SET_COOKIE)
        .expect("response sets a cookie")
        .to_str()
        .unwrap();
    header.split(';').next().unwrap().to_string()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn start_session(app: &Router) -> String {
    let resp = send(app, get("/", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    issued_cookie(&resp)
}

async fn next_text(app: &Router, cookie: &str) -> Option<String> {
    let resp = send(app, get("/questions/next", Some(cookie))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    body["question"]["text"].as_str().map(str::to_string)
}

async fn submit(app: &Router, cookie: &str, question: &str, answer: &str) -> StatusCode {
    let body = json!({ "question": question, "answer": answer });
    send(app, post_json("/answers", Some(cookie), body))
        .await
        .status()
}

#[tokio::test]
async fn health_check() {
    let resp = send(&app(), get("/health", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn landing_issues_a_session_cookie() {
    let app = app();
    let resp = send(&app, get("/", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let header = resp.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(header.starts_with(&format!("{SESSION_COOKIE}=")));
    assert!(header.contains("Path=/"));
    assert!(header.contains("SameSite=Lax"));
    assert!(!header.contains("Secure"));

    let body = body_json(resp).await;
    assert_eq!(body["new_session"], json!(true));
    assert_eq!(body["answered"], json!(0));
}

#[tokio::test]
async fn returning_visitor_keeps_the_session() {
    let app = app();
    let cookie = start_session(&app).await;
    assert_eq!(submit(&app, &cookie, NAME, "Ayşe Yılmaz").await, StatusCode::OK);

    let resp = send(&app, get("/", Some(&cookie))).await;
    assert!(resp.headers().get(SET_COOKIE).is_none());
    let body = body_json(resp).await;
    assert_eq!(body["new_session"], json!(false));
    assert_eq!(body["answered"], json!(1));
}

#[tokio::test]
async fn secure_cookies_when_configured() {
    let mut state = AppState::new(
        Arc::new(MemoryAnswerStore::new()),
        Arc::new(Questionnaire::builtin().unwrap()),
    );
    state.cookies = CookieSettings { secure: true };
    let app = router(state);

    let resp = send(&app, get("/", None)).await;
    let header = resp.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(header.contains("Secure"));
    assert!(header.contains("HttpOnly"));
}

#[tokio::test]
async fn questions_follow_declaration_order() {
    let app = app();
    let cookie = start_session(&app).await;

    assert_eq!(next_text(&app, &cookie).await.as_deref(), Some(NAME));
    assert_eq!(submit(&app, &cookie, NAME, "Ayşe Yılmaz").await, StatusCode::OK);
    assert_eq!(next_text(&app, &cookie).await.as_deref(), Some(AGE));
    assert_eq!(submit(&app, &cookie, AGE, "34").await, StatusCode::OK);
    assert_eq!(next_text(&app, &cookie).await.as_deref(), Some(GENDER));
}

#[tokio::test]
async fn duplicate_submission_is_rejected_and_not_stored() {
    let app = app();
    let cookie = start_session(&app).await;

    assert_eq!(submit(&app, &cookie, NAME, "Ayşe").await, StatusCode::OK);

    let body = json!({ "question": NAME, "answer": "Fatma" });
    let resp = send(&app, post_json("/answers", Some(&cookie), body)).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "this question has already been answered" })
    );

    let conversation = body_json(send(&app, get("/answers", Some(&cookie))).await).await;
    assert_eq!(conversation, json!([{ "question": NAME, "answer": "Ayşe" }]));
}

#[tokio::test]
async fn repeat_with_an_invalid_answer_is_still_a_conflict() {
    let app = app();
    let cookie = start_session(&app).await;

    assert_eq!(submit(&app, &cookie, GENDER, "Kadın").await, StatusCode::OK);

    let body = json!({ "question": GENDER, "answer": "kadın" });
    let resp = send(&app, post_json("/answers", Some(&cookie), body)).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "this question has already been answered" })
    );

    let body = json!({ "question": format!("  {GENDER} "), "answer": "" });
    let resp = send(&app, post_json("/answers", Some(&cookie), body)).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let conversation = body_json(send(&app, get("/answers", Some(&cookie))).await).await;
    assert_eq!(conversation, json!([{ "question": GENDER, "answer": "Kadın" }]));
}

#[tokio::test]
async fn submission_needs_a_session() {
    let body = json!({ "question": NAME, "answer": "Ayşe" });
    let resp = send(&app(), post_json("/answers", None, body)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_session_cookie_is_rejected() {
    let cookie = format!("{SESSION_COOKIE}=../../etc");
    let body = json!({ "question": NAME, "answer": "Ayşe" });
    let resp = send(&app(), post_json("/answers", Some(&cookie), body)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn bad_submissions_leave_the_session_untouched() {
    let app = app();
    let cookie = start_session(&app).await;

    assert_eq!(submit(&app, &cookie, "   ", "x").await, StatusCode::BAD_REQUEST);
    assert_eq!(
        submit(&app, &cookie, "Favori renginiz?", "mavi").await,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(submit(&app, &cookie, AGE, "otuz").await, StatusCode::BAD_REQUEST);
    assert_eq!(submit(&app, &cookie, AGE, "300").await, StatusCode::BAD_REQUEST);
    assert_eq!(submit(&app, &cookie, GENDER, "Bilinmiyor").await, StatusCode::BAD_REQUEST);

    let missing_question = json!({ "answer": "Ayşe" });
    let resp = send(&app, post_json("/answers", Some(&cookie), missing_question)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let conversation = body_json(send(&app, get("/answers", Some(&cookie))).await).await;
    assert_eq!(conversation, json!([]));
}

#[tokio::test]
async fn conditional_question_depends_on_prior_answer() {
    let questions = vec![
        QuestionDefinition::radio("Cinsiyet", &["Kadın", "Erkek"]),
        QuestionDefinition::radio("Hamile misiniz?", &["Evet", "Hayır"])
            .when("Cinsiyet", &["Kadın"]),
    ];
    let app = app_with(Questionnaire::load(questions).unwrap());

    let male = start_session(&app).await;
    assert_eq!(submit(&app, &male, "Cinsiyet", "Erkek").await, StatusCode::OK);
    assert_eq!(next_text(&app, &male).await, None);

    let female = start_session(&app).await;
    assert_eq!(submit(&app, &female, "Cinsiyet", "Kadın").await, StatusCode::OK);
    assert_eq!(
        next_text(&app, &female).await.as_deref(),
        Some("Hamile misiniz?")
    );
}

#[tokio::test]
async fn exhausted_questionnaire_returns_null() {
    let app = app_with(Questionnaire::load(vec![QuestionDefinition::text("Tek soru")]).unwrap());
    let cookie = start_session(&app).await;
    assert_eq!(submit(&app, &cookie, "Tek soru", "cevap").await, StatusCode::OK);

    let resp = send(&app, get("/questions/next", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "question": null }));
}

#[tokio::test]
async fn reset_clears_answers_and_issues_a_new_session() {
    let app = app();
    let cookie = start_session(&app).await;
    assert_eq!(submit(&app, &cookie, NAME, "Ayşe").await, StatusCode::OK);

    let resp = send(&app, post_json("/reset", Some(&cookie), json!({}))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fresh = issued_cookie(&resp);
    assert_ne!(fresh, cookie);
    assert_eq!(body_json(resp).await, json!({ "status": "success", "cleared": 1 }));

    let old = body_json(send(&app, get("/answers", Some(&cookie))).await).await;
    assert_eq!(old, json!([]));
    assert_eq!(next_text(&app, &fresh).await.as_deref(), Some(NAME));
}

#[tokio::test]
async fn questionnaire_listing() {
    let resp = send(&app(), get("/questions", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let questions = body.as_array().unwrap();
    assert_eq!(questions.len(), Questionnaire::builtin().unwrap().len());
    assert_eq!(questions[0]["text"], json!(NAME));
    assert_eq!(questions[2]["kind"], json!("radio"));
}

#[tokio::test]
async fn transcript_is_not_found_without_answers() {
    let app = app();
    let cookie = start_session(&app).await;
    let resp = send(&app, get("/transcript", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn transcript_downloads_as_pdf_and_docx() {
    let app = app();
    let cookie = start_session(&app).await;
    assert_eq!(submit(&app, &cookie, NAME, "Ayşe Yılmaz").await, StatusCode::OK);
    assert_eq!(submit(&app, &cookie, AGE, "34").await, StatusCode::OK);

    let resp = send(&app, get("/transcript", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[CONTENT_TYPE], "application/pdf");
    assert_eq!(
        resp.headers()[CONTENT_DISPOSITION],
        "attachment; filename=\"anamnez-transcript.pdf\""
    );
    assert!(body_bytes(resp).await.starts_with(b"%PDF"));

    let resp = send(&app, get("/transcript?format=docx", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_bytes(resp).await.starts_with(b"PK"));

    let resp = send(&app, get("/transcript?format=xls", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

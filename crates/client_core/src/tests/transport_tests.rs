use super::*;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use shared::forms::ResumeFile;
use std::sync::Arc;
use tokio::{net::TcpListener, sync::Mutex};

type Fields = Arc<Mutex<Vec<(String, Option<String>, Vec<u8>)>>>;

#[derive(Clone)]
struct ServerState {
    fields: Fields,
    reply: (StatusCode, SubmitResponse),
}

async fn handle_submit(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> (StatusCode, Json<SubmitResponse>) {
    while let Ok(Some(part)) = multipart.next_field().await {
        let name = part.name().unwrap_or_default().to_string();
        let filename = part.file_name().map(str::to_string);
        let bytes = part.bytes().await.unwrap_or_default().to_vec();
        state.fields.lock().await.push((name, filename, bytes));
    }
    (state.reply.0, Json(state.reply.1.clone()))
}

async fn spawn_site_server(reply: (StatusCode, SubmitResponse)) -> (String, Fields) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let fields: Fields = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(contact_api_route(), post(handle_submit))
        .route(application_api_route(), post(handle_submit))
        .with_state(ServerState {
            fields: fields.clone(),
            reply,
        });
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), fields)
}

fn text_field(fields: &[(String, Option<String>, Vec<u8>)], name: &str) -> Option<String> {
    fields
        .iter()
        .find(|(field_name, _, _)| field_name == name)
        .map(|(_, _, bytes)| String::from_utf8_lossy(bytes).into_owned())
}

#[tokio::test]
async fn contact_posts_wire_field_names() {
    let accepted = SubmitResponse {
        success: true,
        message: Some("Submission received and emailed.".into()),
        error: None,
        reference: None,
    };
    let (url, fields) = spawn_site_server((StatusCode::CREATED, accepted)).await;
    let submitter = HttpFormSubmitter::new(format!("{url}/"));

    let ack = submitter
        .submit_contact(&ContactForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        })
        .await
        .expect("ack");
    assert_eq!(ack.detail.as_deref(), Some("Submission received and emailed."));

    let fields = fields.lock().await;
    assert_eq!(text_field(&fields, "user_email").as_deref(), Some("ada@example.com"));
    assert_eq!(text_field(&fields, "message").as_deref(), Some("Hello"));
}

#[tokio::test]
async fn application_sends_resume_as_file_part() {
    let accepted = SubmitResponse {
        success: true,
        message: None,
        error: None,
        reference: None,
    };
    let (url, fields) = spawn_site_server((StatusCode::CREATED, accepted)).await;
    let submitter = HttpFormSubmitter::new(url);

    submitter
        .submit_application(&ApplicationForm {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@example.com".into(),
            phone: "555-0100".into(),
            description: "Compilers".into(),
            resume: Some(ResumeFile {
                filename: "grace.pdf".into(),
                content_type: Some("application/pdf".into()),
                bytes: b"%PDF-1.4".to_vec(),
            }),
        })
        .await
        .expect("ack");

    let fields = fields.lock().await;
    assert_eq!(text_field(&fields, "message").as_deref(), Some("Compilers"));
    let resume = fields
        .iter()
        .find(|(name, _, _)| name == "resume")
        .expect("resume part");
    assert_eq!(resume.1.as_deref(), Some("grace.pdf"));
    assert_eq!(resume.2, b"%PDF-1.4".to_vec());
}

#[tokio::test]
async fn server_error_text_becomes_rejection() {
    let (url, _) = spawn_site_server((
        StatusCode::BAD_GATEWAY,
        SubmitResponse::rejected("email relay unreachable"),
    ))
    .await;
    let submitter = HttpFormSubmitter::new(url);

    let err = submitter
        .submit_contact(&ContactForm::default())
        .await
        .expect_err("rejected");
    assert_eq!(err, SubmitError::Rejected("email relay unreachable".into()));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let submitter = HttpFormSubmitter::new(format!("http://{addr}"));
    let err = submitter
        .submit_contact(&ContactForm::default())
        .await
        .expect_err("no server");
    assert!(matches!(err, SubmitError::Transport(_)));
}

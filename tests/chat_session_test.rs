//! Session orchestration tests: credential guard, error turns, transcript

mod common;

use common::*;
use policyrag::models::Credentials;
use policyrag::models::Role;
use policyrag::rag::RagService;
use policyrag::session::ChatSession;
use policyrag::session::TurnOutcome;
use policyrag::session::MISSING_CREDENTIALS_NOTICE;
use serde_json::json;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_missing_credentials_short_circuit() {
    let server = MockServer::start().await;
    let config = test_config(&server);

    // No keys supplied for this session
    let rag = RagService::new(&config, &Credentials::default()).unwrap();
    let mut session = ChatSession::new(rag, Credentials::default());

    let outcome = session.submit("What is the leave policy?").await;

    match outcome {
        TurnOutcome::Rejected { message } => {
            assert_eq!(message, MISSING_CREDENTIALS_NOTICE);
        }
        other => panic!("expected rejection, got {other:?}"),
    }

    // The user turn is echoed but never answered
    let transcript = session.transcript();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].role, Role::User);
    assert_eq!(transcript[0].content, "What is the leave policy?");

    // And no network call was made
    assert!(requested_paths(&server).await.is_empty());
}

#[tokio::test]
async fn test_answered_turn_appends_user_then_assistant() {
    let server = MockServer::start().await;

    mount_embedding(&server, &[0.1, 0.2]).await;
    mount_index_lookup(&server).await;
    mount_query(
        &server,
        json!([
            { "id": "a", "score": 0.8, "metadata": { "text_content": "probation lasts 60 days" } }
        ]),
    )
    .await;
    mount_generation(&server, "Probation lasts 60 days.").await;

    let config = test_config(&server);
    let rag = RagService::new(&config, &test_credentials()).unwrap();
    let mut session = ChatSession::new(rag, test_credentials());

    let outcome = session.submit("How long is probation?").await;
    assert!(matches!(outcome, TurnOutcome::Answered(_)));

    let transcript = session.transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].role, Role::User);
    assert_eq!(transcript[1].role, Role::Assistant);
    assert_eq!(transcript[1].content, "Probation lasts 60 days.");
}

#[tokio::test]
async fn test_embedding_failure_stops_the_pipeline() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(EMBED_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
        .mount(&server)
        .await;
    mount_index_lookup(&server).await;
    mount_generation(&server, "should never be reached").await;

    let config = test_config(&server);
    let rag = RagService::new(&config, &test_credentials()).unwrap();
    let mut session = ChatSession::new(rag, test_credentials());

    let outcome = session.submit("How long is probation?").await;

    match outcome {
        TurnOutcome::Failed { message } => {
            assert!(message.contains("Embedding error"), "got: {message}");
        }
        other => panic!("expected failure, got {other:?}"),
    }

    // The failure is recorded as the assistant's reply
    let transcript = session.transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].role, Role::User);
    assert_eq!(transcript[1].role, Role::Assistant);
    assert!(transcript[1].content.starts_with("Something went wrong:"));

    // Neither search nor generation was attempted
    let paths = requested_paths(&server).await;
    assert_eq!(paths, vec![EMBED_PATH.to_string()]);
}

#[tokio::test]
async fn test_generation_quota_failure_does_not_poison_the_session() {
    let server = MockServer::start().await;

    mount_embedding(&server, &[0.3, 0.4]).await;
    mount_index_lookup(&server).await;
    mount_query(
        &server,
        json!([
            { "id": "a", "score": 0.9, "metadata": { "text_content": "remote work needs manager sign-off" } }
        ]),
    )
    .await;

    // First completion attempt is out of quota; the next one succeeds
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_generation(&server, "Remote work requires manager sign-off.").await;

    let config = test_config(&server);
    let rag = RagService::new(&config, &test_credentials()).unwrap();
    let mut session = ChatSession::new(rag, test_credentials());

    let outcome = session.submit("Can I work remotely?").await;
    match outcome {
        TurnOutcome::Failed { message } => {
            assert!(message.contains("Generation error"), "got: {message}");
            assert!(message.contains("quota exceeded"), "got: {message}");
        }
        other => panic!("expected failure, got {other:?}"),
    }

    // The session stays usable after the failed turn
    let outcome = session.submit("Can I work remotely?").await;
    assert!(matches!(outcome, TurnOutcome::Answered(_)));

    let transcript = session.transcript();
    assert_eq!(transcript.len(), 4);
    assert_eq!(
        transcript[3].content,
        "Remote work requires manager sign-off."
    );
}

#[tokio::test]
async fn test_transcript_length_invariant() {
    // Answered and failed turns each contribute two entries; rejected
    // turns contribute one.
    let server = MockServer::start().await;

    mount_embedding(&server, &[0.1]).await;
    mount_index_lookup(&server).await;
    mount_query(&server, json!([])).await;
    mount_generation(&server, "No policy covers that.").await;

    let config = test_config(&server);
    let rag = RagService::new(&config, &test_credentials()).unwrap();
    let mut session = ChatSession::new(rag, test_credentials());

    session.submit("first question").await;
    session.submit("second question").await;
    assert_eq!(session.transcript().len(), 2 * 2);

    let rejected_rag = RagService::new(&config, &Credentials::default()).unwrap();
    let mut rejected_session = ChatSession::new(rejected_rag, Credentials::default());

    rejected_session.submit("first question").await;
    rejected_session.submit("second question").await;
    assert_eq!(rejected_session.transcript().len(), 2);
}

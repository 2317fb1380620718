//! Integration tests for the send-message exchange.
//!
//! Every test drives the use case through the [`MockTransport`] so the
//! error-path and pass-through behaviors are verified without any network.

use std::sync::Arc;

use twinchat::{
    ChatTurn, MockTransport, Role, SendMessageUseCase, APOLOGY_REPLY, DEMO_MODE_REPLY,
    FILLER_REPLY,
};

fn sample_history() -> Vec<ChatTurn> {
    vec![
        ChatTurn::model("Hello. Ask me anything."),
        ChatTurn::user("What do you specialize in?"),
        ChatTurn::model("Fintech, design systems, minimalist UI."),
    ]
}

#[tokio::test]
async fn unconfigured_returns_demo_reply_for_any_input() {
    let use_case = SendMessageUseCase::unconfigured();

    let first = use_case.reply_text("hello", &[]).await;
    let second = use_case.reply_text("are you available?", &sample_history()).await;

    assert_eq!(first, DEMO_MODE_REPLY);
    assert_eq!(second, DEMO_MODE_REPLY);
}

#[tokio::test]
async fn unconfigured_execute_is_typed_and_makes_no_transport_calls() {
    // The transport exists but is deliberately not wired in, mirroring a
    // deployment where the key is missing: nothing may reach it.
    let transport = Arc::new(MockTransport::new("should never be seen"));
    let use_case = SendMessageUseCase::with_optional_transport(None);

    let err = use_case.execute("hello", &[]).await.unwrap_err();

    assert!(err.is_unconfigured());
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn configured_returns_transport_text_exactly() {
    let transport = Arc::new(MockTransport::new("Design is how it works."));
    let use_case = SendMessageUseCase::new(transport.clone());

    let typed = use_case.execute("what is design?", &[]).await.unwrap();
    let legacy = use_case.reply_text("what is design?", &[]).await;

    assert_eq!(typed, "Design is how it works.");
    assert_eq!(legacy, "Design is how it works.");
}

#[tokio::test]
async fn failing_transport_returns_apology_without_propagating() {
    let transport = Arc::new(MockTransport::failing("connection reset"));
    let use_case = SendMessageUseCase::new(transport.clone());

    let reply = use_case.reply_text("hello", &sample_history()).await;
    assert_eq!(reply, APOLOGY_REPLY);

    let err = use_case.execute("hello", &sample_history()).await.unwrap_err();
    assert!(err.is_transport_error());
}

#[tokio::test]
async fn empty_reply_returns_filler() {
    let transport = Arc::new(MockTransport::empty());
    let use_case = SendMessageUseCase::new(transport.clone());

    let reply = use_case.reply_text("hello", &[]).await;
    assert_eq!(reply, FILLER_REPLY);

    let err = use_case.execute("hello", &[]).await.unwrap_err();
    assert!(err.is_empty_response());
}

#[tokio::test]
async fn whitespace_only_reply_counts_as_empty() {
    let transport = Arc::new(MockTransport::new("   \n\t"));
    let use_case = SendMessageUseCase::new(transport);

    let reply = use_case.reply_text("hello", &[]).await;
    assert_eq!(reply, FILLER_REPLY);
}

#[tokio::test]
async fn payload_is_history_plus_utterance_in_order() {
    let transport = Arc::new(MockTransport::new("ok"));
    let use_case = SendMessageUseCase::new(transport.clone());

    let history = sample_history();
    use_case
        .execute("Are you open for freelance work?", &history)
        .await
        .unwrap();

    let call = transport.last_call().expect("transport was not called");
    assert_eq!(call.turns.len(), history.len() + 1);

    for (sent, original) in call.turns.iter().zip(history.iter()) {
        assert_eq!(sent, original);
    }

    let newest = call.turns.last().unwrap();
    assert_eq!(newest.role(), Role::User);
    assert_eq!(newest.text(), "Are you open for freelance work?");
}

#[tokio::test]
async fn empty_history_sends_exactly_one_turn() {
    let transport = Arc::new(MockTransport::new("ok"));
    let use_case = SendMessageUseCase::new(transport.clone());

    use_case.execute("hello", &[]).await.unwrap();

    let call = transport.last_call().unwrap();
    assert_eq!(call.turns.len(), 1);
    assert_eq!(call.turns[0].role(), Role::User);
}

#[tokio::test]
async fn exactly_one_transport_call_per_invocation() {
    let transport = Arc::new(MockTransport::new("ok"));
    let use_case = SendMessageUseCase::new(transport.clone());

    use_case.execute("first", &[]).await.unwrap();
    assert_eq!(transport.call_count(), 1);

    use_case.execute("second", &sample_history()).await.unwrap();
    assert_eq!(transport.call_count(), 2);
}

#[tokio::test]
async fn failed_calls_still_count_a_single_attempt() {
    // No retry: a failing exchange must not trigger a second request.
    let transport = Arc::new(MockTransport::failing("boom"));
    let use_case = SendMessageUseCase::new(transport.clone());

    let _ = use_case.reply_text("hello", &[]).await;
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn system_instruction_travels_with_every_request() {
    let transport = Arc::new(MockTransport::new("ok"));
    let use_case = SendMessageUseCase::new(transport.clone());

    use_case.execute("who are you?", &[]).await.unwrap();

    let call = transport.last_call().unwrap();
    assert!(call.system.contains("AI Digital Twin"));
    assert!(call.system.contains("tolutopeadebayo@gmail.com"));
    assert!(call.system.contains("under 50 words"));
}

#[tokio::test]
async fn custom_persona_replaces_system_instruction() {
    use twinchat::Persona;

    let transport = Arc::new(MockTransport::new("ok"));
    let persona = Persona::new("Ada", "systems designer", "ada@example.com");
    let use_case = SendMessageUseCase::new(transport.clone()).with_persona(persona);

    use_case.execute("hello", &[]).await.unwrap();

    let call = transport.last_call().unwrap();
    assert!(call.system.contains("AI Digital Twin of Ada"));
    assert!(!call.system.contains("Tolutope"));
}

mod common;

use std::sync::Arc;

use common::{EchoProvider, FailingProvider};
use green_pulse_chatbot::error::AppError;
use green_pulse_chatbot::message::ChatRequest;
use green_pulse_chatbot::services::gateway::{ChatGateway, DEFAULT_INSTRUCTION};
use green_pulse_chatbot::services::providers::ProviderError;

#[tokio::test]
async fn test_gateway_prepends_instruction() {
    let provider = Arc::new(EchoProvider::default());
    let gateway = ChatGateway::new(provider.clone());

    let reply = gateway
        .handle_chat(ChatRequest::new("Where is the leaderboard?"))
        .await
        .unwrap();

    assert_eq!(
        reply.response,
        format!("{DEFAULT_INSTRUCTION}\nUser: Where is the leaderboard?")
    );
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_gateway_custom_instruction() {
    let provider = Arc::new(EchoProvider::default());
    let gateway = ChatGateway::with_instruction(provider.clone(), "Answer in one word.");

    let reply = gateway.handle_chat(ChatRequest::new("Ready?")).await.unwrap();

    assert_eq!(reply.response, "Answer in one word.\nUser: Ready?");
    assert_eq!(gateway.instruction(), "Answer in one word.");
}

#[tokio::test]
async fn test_gateway_passes_untrimmed_message() {
    let provider = Arc::new(EchoProvider::default());
    let gateway = ChatGateway::new(provider.clone());

    gateway.handle_chat(ChatRequest::new("  padded  ")).await.unwrap();

    assert!(provider.prompts()[0].ends_with("\nUser:   padded  "));
}

#[tokio::test]
async fn test_gateway_rejects_missing_and_blank_messages() {
    let provider = Arc::new(EchoProvider::default());
    let gateway = ChatGateway::new(provider.clone());

    for request in [ChatRequest::default(), ChatRequest::new(""), ChatRequest::new(" \t\n ")] {
        let err = gateway.handle_chat(request).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest));
    }
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_gateway_does_not_retry_failures() {
    let provider = Arc::new(FailingProvider::default());
    let gateway = ChatGateway::new(provider.clone());

    let err = gateway.handle_chat(ChatRequest::new("hello")).await.unwrap_err();

    match err {
        AppError::ProviderFailure(ProviderError::Network(detail)) => {
            assert_eq!(detail, "connection reset by peer");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_gateway_concurrent_calls_are_independent() {
    let provider = Arc::new(EchoProvider::default());
    let gateway = ChatGateway::new(provider.clone());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let gateway = gateway.clone();
            tokio::spawn(async move { (i, gateway.handle_chat(ChatRequest::new(format!("question {i}"))).await) })
        })
        .collect();

    for handle in handles {
        let (i, reply) = handle.await.unwrap();
        let reply = reply.unwrap();
        assert!(reply.response.ends_with(&format!("\nUser: question {i}")));
    }
    assert_eq!(provider.calls(), 8);
}

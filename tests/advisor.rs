//! Tests for the advisor's fallback behaviour, using an in-memory transport.
use agentvis::advisor::{
    AdvisoryReply, ERROR_REPLY, GenerateRequest, MISSING_KEY_REPLY, ReplySource, SILENT_REPLY,
    SYSTEM_INSTRUCTION,
};
use agentvis::prelude::*;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What the mock transport should answer.
enum Script {
    Reply(&'static str),
    Fail,
}

struct MockGenerator {
    script: Script,
    calls: AtomicUsize,
    last_request: Mutex<Option<(String, String, String)>>,
}

impl MockGenerator {
    fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, request: &GenerateRequest<'_>) -> std::result::Result<String, AdvisorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((
            request.model.to_string(),
            request.system_instruction.to_string(),
            request.query.to_string(),
        ));
        match self.script {
            Script::Reply(text) => Ok(text.to_string()),
            Script::Fail => Err(AdvisorError::Status {
                status: 503,
                body: "unavailable".to_string(),
            }),
        }
    }
}

fn keyed_config() -> AdvisorConfig {
    AdvisorConfig::default().with_api_key("test-key")
}

#[test]
fn test_missing_key_never_calls_the_service() {
    let advisor = Advisor::new(
        AdvisorConfig::default(),
        MockGenerator::new(Script::Reply("should not be seen")),
    );

    let reply = tokio_test::block_on(advisor.consult("How do I show memory?"));
    assert_eq!(
        reply,
        AdvisoryReply {
            text: MISSING_KEY_REPLY.to_string(),
            source: ReplySource::MissingCredentials,
        }
    );
    assert_eq!(advisor_calls(&advisor), 0);
}

#[test]
fn test_blank_key_counts_as_missing() {
    let advisor = Advisor::new(
        AdvisorConfig::default().with_api_key("   "),
        MockGenerator::new(Script::Reply("nope")),
    );
    let text = tokio_test::block_on(advisor.ask("anything"));
    assert_eq!(text, MISSING_KEY_REPLY);
    assert_eq!(advisor_calls(&advisor), 0);
}

#[test]
fn test_model_text_is_returned_verbatim() {
    let generator = MockGenerator::new(Script::Reply("Use a Hierarchical pattern."));
    let advisor = Advisor::new(keyed_config().with_model("gemini-test"), generator);

    let reply = tokio_test::block_on(advisor.consult("Which topology?"));
    assert_eq!(reply.source, ReplySource::Model);
    assert_eq!(reply.text, "Use a Hierarchical pattern.");
    assert_eq!(advisor_calls(&advisor), 1);

    let (model, instruction, query) = last_request(&advisor);
    assert_eq!(model, "gemini-test");
    assert_eq!(instruction, SYSTEM_INSTRUCTION);
    assert_eq!(query, "Which topology?");
}

#[test]
fn test_empty_model_text_yields_silent_reply() {
    let advisor = Advisor::new(keyed_config(), MockGenerator::new(Script::Reply("")));
    let reply = tokio_test::block_on(advisor.consult("Hello?"));
    assert_eq!(reply.text, SILENT_REPLY);
    assert_eq!(reply.source, ReplySource::Silent);
}

#[test]
fn test_service_failure_yields_error_reply() {
    let advisor = Advisor::new(keyed_config(), MockGenerator::new(Script::Fail));
    let reply = tokio_test::block_on(advisor.consult("Hello?"));
    assert_eq!(reply.text, ERROR_REPLY);
    assert_eq!(reply.source, ReplySource::Failed);
    assert_eq!(advisor_calls(&advisor), 1);
}

#[test]
fn test_config_from_lookup() {
    let config = AdvisorConfig::from_lookup(|name| match name {
        "GEMINI_API_KEY" => Some("from-env".to_string()),
        _ => None,
    });
    assert_eq!(config.api_key(), Some("from-env"));
    assert_eq!(config.model, "gemini-2.5-flash");
}

#[test]
fn test_gemini_advisor_builds_without_network() {
    // Construction only; no request is sent without a key.
    let advisor = Advisor::gemini(AdvisorConfig::default()).unwrap();
    let text = tokio_test::block_on(advisor.ask("Anything?"));
    assert_eq!(text, MISSING_KEY_REPLY);
}

#[tokio::test]
async fn test_gemini_unreachable_endpoint_yields_error_reply() {
    let config = keyed_config()
        .with_base_url("http://127.0.0.1:9")
        .with_timeout(std::time::Duration::from_secs(2));
    let advisor = Advisor::gemini(config).unwrap();

    let reply = advisor.consult("Anything?").await;
    assert_eq!(reply.text, ERROR_REPLY);
    assert_eq!(reply.source, ReplySource::Failed);
}

fn advisor_calls(advisor: &Advisor<MockGenerator>) -> usize {
    generator(advisor).calls.load(Ordering::SeqCst)
}

fn last_request(advisor: &Advisor<MockGenerator>) -> (String, String, String) {
    generator(advisor)
        .last_request
        .lock()
        .unwrap()
        .clone()
        .unwrap()
}

fn generator(advisor: &Advisor<MockGenerator>) -> &MockGenerator {
    advisor.generator()
}

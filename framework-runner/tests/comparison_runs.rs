use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use framework_adapters::completion::{CompletionOutcome, CompletionSettings, ERROR_MARKER};
use framework_adapters::traits::{
    AdapterError, AdapterMetadata, AdapterResult, AdapterStream, CompletionRequest, InferenceChunk,
    ModelAdapter,
};
use framework_primitives::{ModelId, Strategy, Temperature};
use framework_prompts::build_prompt;
use framework_runner::{DemoRunner, Intermediate};
use futures::stream;

/// Answers each call with `reply-<n>` and records what it was sent.
struct ScriptedAdapter {
    metadata: AdapterMetadata,
    requests: Mutex<Vec<CompletionRequest>>,
    fail_calls: Vec<usize>,
}

impl ScriptedAdapter {
    fn new() -> Arc<Self> {
        Self::failing_on(Vec::new())
    }

    fn failing_on(fail_calls: Vec<usize>) -> Arc<Self> {
        Arc::new(Self {
            metadata: AdapterMetadata::new("scripted", "gpt-4o"),
            requests: Mutex::new(Vec::new()),
            fail_calls,
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|request| request.prompt().to_owned())
            .collect()
    }
}

#[async_trait]
impl ModelAdapter for ScriptedAdapter {
    fn metadata(&self) -> &AdapterMetadata {
        &self.metadata
    }

    async fn infer(&self, request: CompletionRequest) -> AdapterResult<AdapterStream> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request);
            requests.len()
        };
        if self.fail_calls.contains(&call) {
            return Err(AdapterError::transport(format!("call {call} refused")));
        }
        let chunk = InferenceChunk::new(format!("reply-{call}"), true);
        Ok(Box::pin(stream::once(async move { Ok(chunk) })))
    }
}

fn completed(text: &str) -> CompletionOutcome {
    CompletionOutcome::Completed {
        text: text.to_owned(),
    }
}

fn settings() -> CompletionSettings {
    CompletionSettings::new(ModelId::Gpt4oMini, Temperature::new(0.4).unwrap())
}

#[tokio::test]
async fn reflection_issues_three_chained_calls_after_basic() {
    let task = "Write an email to stakeholders explaining that the product launch date will be delayed by two weeks.";
    let adapter = ScriptedAdapter::new();
    let runner = DemoRunner::new(adapter.clone(), settings());
    let preview = build_prompt(Strategy::ReflectionRevision, task).unwrap();

    let report = runner
        .run(Strategy::ReflectionRevision, task, &preview)
        .await
        .unwrap();

    let prompts = adapter.prompts();
    assert_eq!(report.calls(), 4);
    assert_eq!(prompts.len(), 4);
    assert_eq!(prompts[0], task);

    assert!(prompts[1].starts_with(task));
    assert!(prompts[1].ends_with("Please provide your answer to this problem."));

    assert!(prompts[2].contains("Here was my initial answer:\nreply-2"));

    assert!(prompts[3].contains("Initial answer:\nreply-2"));
    assert!(prompts[3].contains("Critique:\nreply-3"));

    assert_eq!(report.basic_output().text(), Some("reply-1"));
    assert_eq!(report.strategy_output().text(), Some("reply-4"));
    assert_eq!(
        report.intermediate(),
        Some(&Intermediate::Reflection {
            initial_answer: completed("reply-2"),
            critique: completed("reply-3"),
            final_answer: completed("reply-4"),
        })
    );
}

#[tokio::test]
async fn self_consistency_samples_then_builds_consensus() {
    let task = "A colleague asks for a weekend review. How do you respond?";
    let adapter = ScriptedAdapter::new();
    let runner = DemoRunner::new(adapter.clone(), settings())
        .with_samples(NonZeroUsize::new(4).unwrap());
    let sample_prompt = build_prompt(Strategy::SelfConsistency, task).unwrap();

    let report = runner
        .run(Strategy::SelfConsistency, task, &sample_prompt)
        .await
        .unwrap();

    let prompts = adapter.prompts();
    // basic + 4 samples + consensus
    assert_eq!(prompts.len(), 6);
    assert_eq!(report.calls(), 6);
    assert!(prompts[1..5].iter().all(|prompt| *prompt == sample_prompt));

    let consensus = &prompts[5];
    let positions: Vec<_> = ["reply-2", "reply-3", "reply-4", "reply-5"]
        .iter()
        .map(|sample| consensus.find(sample).expect("sample embedded"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    assert_eq!(report.strategy_output().text(), Some("reply-6"));
    match report.intermediate() {
        Some(Intermediate::Samples { samples }) => {
            let texts: Vec<_> = samples.iter().filter_map(CompletionOutcome::text).collect();
            assert_eq!(texts, ["reply-2", "reply-3", "reply-4", "reply-5"]);
        }
        other => panic!("unexpected intermediate: {other:?}"),
    }
}

#[tokio::test]
async fn every_call_carries_run_settings() {
    let adapter = ScriptedAdapter::new();
    let runner = DemoRunner::new(adapter.clone(), settings());

    runner
        .run(Strategy::ChainOfThought, "Cut costs.", "Cut costs. Step by step.")
        .await
        .unwrap();

    let requests = adapter.requests.lock().unwrap();
    assert!(requests.iter().all(|request| {
        request.model() == Some("gpt-4o-mini") && request.temperature() == Some(0.4)
    }));
}

#[tokio::test]
async fn failed_calls_are_reported_and_forwarded() {
    let adapter = ScriptedAdapter::failing_on(vec![1, 2]);
    let runner = DemoRunner::new(adapter.clone(), settings());
    let task = "Write a self-assessment.";
    let preview = build_prompt(Strategy::ReflectionRevision, task).unwrap();

    let report = runner
        .run(Strategy::ReflectionRevision, task, &preview)
        .await
        .unwrap();

    assert!(report.has_failures());
    assert!(report.basic_output().failure().unwrap().contains("call 1 refused"));
    assert!(report.basic_output().display_text().starts_with(ERROR_MARKER));

    let prompts = adapter.prompts();
    assert_eq!(prompts.len(), 4);
    assert!(prompts[2].contains("Here was my initial answer:\nError calling LLM:"));
    assert_eq!(report.strategy_output().text(), Some("reply-4"));
}

#[tokio::test]
async fn failed_sample_is_kept_as_failure() {
    let adapter = ScriptedAdapter::failing_on(vec![2]);
    let runner = DemoRunner::new(adapter.clone(), settings());
    let task = "Pick a database for the billing service.";
    let sample_prompt = build_prompt(Strategy::SelfConsistency, task).unwrap();

    let report = runner
        .run(Strategy::SelfConsistency, task, &sample_prompt)
        .await
        .unwrap();

    assert!(report.basic_output().is_completed());
    assert!(report.strategy_output().is_completed());
    assert!(report.has_failures());

    let Some(Intermediate::Samples { samples }) = report.intermediate() else {
        panic!("expected samples");
    };
    assert!(samples[0].failure().unwrap().contains("call 2 refused"));
    assert_eq!(samples[1].text(), Some("reply-3"));

    let prompts = adapter.prompts();
    assert_eq!(prompts.len(), 5);
    assert!(prompts[4].contains("Answer 1:\nError calling LLM:"));
}

#[tokio::test]
async fn failed_critique_is_kept_as_failure() {
    let adapter = ScriptedAdapter::failing_on(vec![3]);
    let runner = DemoRunner::new(adapter.clone(), settings());
    let task = "Write a self-assessment.";
    let preview = build_prompt(Strategy::ReflectionRevision, task).unwrap();

    let report = runner
        .run(Strategy::ReflectionRevision, task, &preview)
        .await
        .unwrap();

    assert!(report.has_failures());
    let Some(Intermediate::Reflection { critique, .. }) = report.intermediate() else {
        panic!("expected reflection phases");
    };
    assert!(!critique.is_completed());
}

//! Integration tests for [`command_chain::Dispatcher`].
//!
//! Covers chain following (A → B → value), Done ending the chain, errors stopping it, long
//! chains, and a history callback chaining into a message.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use command_chain::{Command, Dispatcher, HistoryCommand, MessageCommand, Outcome};
use common::{sample_event, sample_rows, MemoryStore, RecordingClient};
use sbot_core::{ChatClient, Event, Result, SbotError};

/// Appends its label to a shared log, then returns its configured outcome.
struct Step {
    label: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
    then: Box<dyn Fn() -> Outcome + Send + Sync>,
}

impl Step {
    fn new(
        label: &'static str,
        log: &Arc<Mutex<Vec<&'static str>>>,
        then: impl Fn() -> Outcome + Send + Sync + 'static,
    ) -> Self {
        Self {
            label,
            log: log.clone(),
            then: Box::new(then),
        }
    }
}

#[async_trait]
impl Command for Step {
    async fn execute(&self, _client: &dyn ChatClient, _event: Option<&Event>) -> Result<Outcome> {
        self.log.lock().unwrap().push(self.label);
        Ok((self.then)())
    }
}

fn dispatcher() -> (Dispatcher, Arc<RecordingClient>) {
    let client = Arc::new(RecordingClient::new());
    (Dispatcher::new(client.clone()), client)
}

/// **Test: A returns B, B returns V; dispatch returns V and runs A then B once each.**
#[tokio::test]
async fn test_chain_returns_final_value() {
    let (dispatcher, _client) = dispatcher();
    let log = Arc::new(Mutex::new(Vec::new()));

    let log_b = log.clone();
    let a = Step::new("A", &log, move || {
        Outcome::next(Step::new("B", &log_b, || Outcome::value("V")))
    });

    let result = dispatcher.run(a, None).await.unwrap();

    assert_eq!(result, Some("V".to_string()));
    assert_eq!(*log.lock().unwrap(), vec!["A", "B"]);
}

/// **Test: A command returning Done yields no value.**
#[tokio::test]
async fn test_done_yields_none() {
    let (dispatcher, client) = dispatcher();

    let result = dispatcher
        .run(MessageCommand::to_channel("general", "hi"), None)
        .await
        .unwrap();

    assert_eq!(result, None);
    assert_eq!(client.sent().len(), 1);
}

/// **Test: An error in the middle stops the chain and is returned unchanged.**
#[tokio::test]
async fn test_error_stops_chain() {
    struct Fails;

    #[async_trait]
    impl Command for Fails {
        async fn execute(&self, _c: &dyn ChatClient, _e: Option<&Event>) -> Result<Outcome> {
            Err(SbotError::Client("rate_limited".to_string()))
        }
    }

    let (dispatcher, client) = dispatcher();
    let log = Arc::new(Mutex::new(Vec::new()));
    let a = Step::new("A", &log, || Outcome::next(Fails));

    let err = dispatcher.run(a, None).await.unwrap_err();

    match err {
        SbotError::Client(msg) => assert_eq!(msg, "rate_limited"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(*log.lock().unwrap(), vec!["A"]);
    assert!(client.calls().is_empty());
}

/// **Test: Every command in the chain sees the same event.**
#[tokio::test]
async fn test_event_passed_to_every_step() {
    struct ExpectEvent {
        remaining: usize,
        seen: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Command for ExpectEvent {
        async fn execute(&self, _c: &dyn ChatClient, event: Option<&Event>) -> Result<Outcome> {
            assert_eq!(event.and_then(|e| e.ts.as_deref()), Some("1700000000.000100"));
            self.seen.fetch_add(1, Ordering::SeqCst);
            if self.remaining == 0 {
                Ok(Outcome::Done)
            } else {
                Ok(Outcome::next(ExpectEvent {
                    remaining: self.remaining - 1,
                    seen: self.seen.clone(),
                }))
            }
        }
    }

    let (dispatcher, _client) = dispatcher();
    let seen = Arc::new(AtomicUsize::new(0));
    let event = sample_event();

    dispatcher
        .run(
            ExpectEvent {
                remaining: 2,
                seen: seen.clone(),
            },
            Some(&event),
        )
        .await
        .unwrap();

    assert_eq!(seen.load(Ordering::SeqCst), 3);
}

/// **Test: Long chains run without growing the stack.**
#[tokio::test]
async fn test_long_chain() {
    struct Countdown(usize);

    #[async_trait]
    impl Command for Countdown {
        async fn execute(&self, _c: &dyn ChatClient, _e: Option<&Event>) -> Result<Outcome> {
            if self.0 == 0 {
                Ok(Outcome::value("liftoff"))
            } else {
                Ok(Outcome::next(Countdown(self.0 - 1)))
            }
        }
    }

    let (dispatcher, _client) = dispatcher();

    let result = dispatcher.run(Countdown(50_000), None).await.unwrap();

    assert_eq!(result, Some("liftoff".to_string()));
}

/// **Test: A history callback can chain into a message that posts a summary.**
#[tokio::test]
async fn test_history_callback_chains_message() {
    let (dispatcher, client) = dispatcher();
    let history = HistoryCommand::new(Arc::new(MemoryStore::new(sample_rows())), |records| async move {
        let summary = records
            .iter()
            .map(|r| format!("{}: {}", r.user, r.text))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(Outcome::next(MessageCommand::to_channel("digest", summary)))
    })
    .channel("C1");

    let result = dispatcher.run(history, None).await.unwrap();

    assert_eq!(result, None);
    assert_eq!(
        client.sent(),
        vec![(
            "U1: first\nU2: third\nU1: fifth".to_string(),
            "CID-digest".to_string()
        )]
    );
}

/// **Test: Default command names are the short type name.**
#[test]
fn test_default_name_is_short_type_name() {
    struct Custom;

    #[async_trait]
    impl Command for Custom {
        async fn execute(&self, _c: &dyn ChatClient, _e: Option<&Event>) -> Result<Outcome> {
            Ok(Outcome::Done)
        }
    }

    assert_eq!(Custom.name(), "Custom");
    assert_eq!(MessageCommand::default().name(), "MessageCommand");
}

//! Broker integration tests against a containerized NATS server.
//!
//! These exercise the real JetStream transport: idempotent queue
//! declaration, publish with broker ack, durable consumption, and the
//! listener's consume -> transform -> re-publish loop.

use std::sync::Arc;
use std::time::Duration;

use messaging::{
    EchoListener, EventPublisher, MessageStream, NatsConfig, NatsPublisher, NatsQueueStream,
    RecordingPublisher, Topology,
};
use test_utils::TestNats;

fn topology(tag: &str) -> Topology {
    Topology {
        queue: format!("{tag}Queue"),
        exchange: format!("{tag}Exchange"),
        routing_key: "events".to_string(),
    }
}

#[tokio::test]
async fn test_declare_is_idempotent() {
    let nats = TestNats::new().await;
    let jetstream = nats.jetstream();
    let topology = topology("declare");

    topology.declare(&jetstream).await.unwrap();
    // Second declaration must leave the existing queue untouched
    topology.declare(&jetstream).await.unwrap();
}

#[tokio::test]
async fn test_publish_and_consume_roundtrip() {
    let nats = TestNats::new().await;
    let jetstream = nats.jetstream();
    let topology = topology("roundtrip");
    topology.declare(&jetstream).await.unwrap();

    let publisher = NatsPublisher::new(jetstream.clone(), &NatsConfig::default());
    publisher
        .publish(&topology.topic(), "booking created")
        .await
        .unwrap();

    let mut stream = NatsQueueStream::subscribe(&jetstream, &topology)
        .await
        .unwrap();

    let received = tokio::time::timeout(Duration::from_secs(10), stream.next())
        .await
        .expect("timed out waiting for message")
        .expect("subscription ended unexpectedly");

    assert_eq!(received.subject, topology.subject());
    assert_eq!(received.payload, "booking created");
}

#[tokio::test]
async fn test_subscribe_reuses_durable_consumer() {
    let nats = TestNats::new().await;
    let jetstream = nats.jetstream();
    let topology = topology("durable");
    topology.declare(&jetstream).await.unwrap();

    // First subscribe creates the durable consumer, second finds it
    let first = NatsQueueStream::subscribe(&jetstream, &topology).await;
    assert!(first.is_ok());
    drop(first);

    let second = NatsQueueStream::subscribe(&jetstream, &topology).await;
    assert!(second.is_ok());
}

#[tokio::test]
async fn test_listener_processes_queued_message() {
    let nats = TestNats::new().await;
    let jetstream = nats.jetstream();
    let topology = topology("listener");
    topology.declare(&jetstream).await.unwrap();

    let stream = NatsQueueStream::subscribe(&jetstream, &topology)
        .await
        .unwrap();

    // Re-publish into a recorder instead of the real topic so the
    // listener's own output is not consumed again
    let recorder = Arc::new(RecordingPublisher::new());
    let listener = EchoListener::new(recorder.clone(), topology.topic());
    tokio::spawn(async move { listener.run(stream).await });

    let publisher = NatsPublisher::new(jetstream.clone(), &NatsConfig::default());
    publisher.publish(&topology.topic(), "X").await.unwrap();

    let deadline = tokio::time::Instant::now() + Duration::from_secs(10);
    loop {
        let payloads = recorder.payloads();
        if payloads == ["Processed: X"] {
            break;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "listener never re-published, saw {payloads:?}"
        );
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
}

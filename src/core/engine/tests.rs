use std::sync::Arc;

use super::Engine;
use crate::core::testing::TestStreamProbe;
use crate::core::{Failure, Graph, Stage, StageKind, StreamError, StreamPublisher, UniError};

fn build_error(engine: &Engine<i32>, graph: &Graph<i32>) -> StreamError {
  match engine.build_publisher(graph) {
    | Err(error) => error,
    | Ok(_) => panic!("expected a build error"),
  }
}

#[test]
fn builds_an_emit_pipeline() {
  let engine = Engine::new();
  let publisher = engine.build_publisher(&Graph::emit(vec![1, 2, 3])).unwrap();
  let probe = Arc::new(TestStreamProbe::new());
  publisher.subscribe(probe.clone());
  probe.request(u64::MAX);
  probe.assert_items(&[1, 2, 3]);
  probe.assert_completed();
}

#[test]
fn builds_a_failed_pipeline() {
  let engine = Engine::<i32>::new();
  let publisher = engine
    .build_publisher(&Graph::failed(Failure::from(UniError::AbsentItem)))
    .unwrap();
  let probe = Arc::new(TestStreamProbe::new());
  publisher.subscribe(probe.clone());
  probe.assert_error_message("item is absent");
}

#[test]
fn builds_a_mapped_pipeline() {
  let engine = Engine::new();
  let publisher = engine
    .build_publisher(&Graph::emit(vec![1, 2, 3]).map(|value| value * 10))
    .unwrap();
  let probe = Arc::new(TestStreamProbe::new());
  publisher.subscribe(probe.clone());
  probe.request(u64::MAX);
  probe.assert_items(&[10, 20, 30]);
  probe.assert_completed();
}

#[test]
fn builds_a_concat_pipeline_with_nested_graphs() {
  let engine = Engine::new();
  let graph = Graph::concat(Graph::emit(vec![1, 2]).map(|value| value + 100), Graph::emit(vec![3]));
  let publisher = engine.build_publisher(&graph).unwrap();
  let probe = Arc::new(TestStreamProbe::new());
  publisher.subscribe(probe.clone());
  probe.request(u64::MAX);
  probe.assert_items(&[101, 102, 3]);
  probe.assert_completed();
}

#[test]
fn rejects_an_empty_graph() {
  let engine = Engine::new();
  assert_eq!(build_error(&engine, &Graph::from_stages(Vec::new())), StreamError::EmptyGraph);
}

#[test]
fn rejects_an_intermediate_stage_at_the_head() {
  let engine = Engine::new();
  let graph = Graph::from_stages(vec![Stage::Map { mapper: Arc::new(|value| value) }]);
  assert_eq!(build_error(&engine, &graph), StreamError::MisplacedStage(StageKind::Map));
}

#[test]
fn rejects_a_source_stage_past_the_head() {
  let engine = Engine::new();
  let graph = Graph::from_stages(vec![Stage::Emit { items: vec![1] }, Stage::Emit { items: vec![2] }]);
  assert_eq!(build_error(&engine, &graph), StreamError::MisplacedStage(StageKind::Emit));
}

#[test]
fn rejects_a_deregistered_stage_kind() {
  let mut engine = Engine::new();
  assert!(engine.deregister(StageKind::Map).is_some());
  let graph = Graph::emit(vec![1]).map(|value| value);
  assert_eq!(build_error(&engine, &graph), StreamError::UnrecognizedStage(StageKind::Map));
}

#[test]
fn nested_graph_errors_surface_at_build_time() {
  let engine = Engine::new();
  let graph = Graph::concat(Graph::from_stages(Vec::new()), Graph::emit(vec![1]));
  assert_eq!(build_error(&engine, &graph), StreamError::EmptyGraph);
}

#[test]
fn graphs_are_reusable_across_builds() {
  let engine = Engine::new();
  let graph = Graph::emit(vec![1, 2]);
  for _ in 0..2 {
    let publisher = engine.build_publisher(&graph).unwrap();
    let probe = Arc::new(TestStreamProbe::new());
    publisher.subscribe(probe.clone());
    probe.request(u64::MAX);
    probe.assert_items(&[1, 2]);
    probe.assert_completed();
  }
}

use std::sync::{Arc, Barrier};
use std::thread;

use super::ConcatPublisher;
use crate::core::testing::{TestStreamProbe, TestStreamSource};
use crate::core::{EmitPublisher, FailedPublisher, Failure, StreamPublisher, UniError};

fn emit(items: Vec<i32>) -> Arc<dyn StreamPublisher<i32>> {
  Arc::new(EmitPublisher::new(items))
}

#[test]
fn emits_first_then_second_in_order() {
  let publisher = ConcatPublisher::new(emit(vec![1, 2]), emit(vec![3]));
  let probe = Arc::new(TestStreamProbe::new());
  publisher.subscribe(probe.clone());
  probe.request(u64::MAX);
  probe.assert_items(&[1, 2, 3]);
  probe.assert_completed();
}

#[test]
fn bounded_demand_pauses_inside_the_first_pipeline() {
  let publisher = ConcatPublisher::new(emit(vec![1, 2]), emit(vec![3]));
  let probe = Arc::new(TestStreamProbe::new());
  publisher.subscribe(probe.clone());
  probe.request(1);
  probe.assert_items(&[1]);
  probe.assert_not_terminated();
  probe.request(2);
  probe.assert_items(&[1, 2, 3]);
  probe.assert_completed();
}

#[test]
fn outstanding_demand_carries_across_the_switch() {
  let publisher = ConcatPublisher::new(emit(vec![1, 2]), emit(vec![3, 4]));
  let probe = Arc::new(TestStreamProbe::new());
  publisher.subscribe(probe.clone());
  probe.request(3);
  probe.assert_items(&[1, 2, 3]);
  probe.assert_not_terminated();
  probe.request(1);
  probe.assert_items(&[1, 2, 3, 4]);
  probe.assert_completed();
}

#[test]
fn first_failure_short_circuits_and_suppresses_the_second() {
  let second = TestStreamSource::<i32>::new();
  let publisher = ConcatPublisher::new(
    Arc::new(FailedPublisher::new(Failure::from(UniError::AbsentItem))),
    Arc::new(second.clone()),
  );
  let probe = Arc::new(TestStreamProbe::new());
  publisher.subscribe(probe.clone());
  probe.assert_error_message("item is absent");
  assert!(!second.is_subscribed());
}

#[test]
fn second_failure_terminates_the_stream() {
  let publisher = ConcatPublisher::new(
    emit(vec![1]),
    Arc::new(FailedPublisher::new(Failure::from(UniError::AbsentItem))),
  );
  let probe = Arc::new(TestStreamProbe::new());
  publisher.subscribe(probe.clone());
  probe.request(u64::MAX);
  probe.assert_items(&[1]);
  probe.assert_error_message("item is absent");
}

#[test]
fn cancellation_during_the_first_suppresses_the_second() {
  let first = TestStreamSource::<i32>::new();
  let second = TestStreamSource::<i32>::new();
  let publisher = ConcatPublisher::new(Arc::new(first.clone()), Arc::new(second.clone()));
  let probe = Arc::new(TestStreamProbe::new());
  publisher.subscribe(probe.clone());
  probe.request(5);
  first.push(1);
  probe.cancel();
  assert!(first.is_cancelled());
  first.complete();
  assert!(!second.is_subscribed());
  probe.assert_items(&[1]);
  probe.assert_not_terminated();
}

#[test]
fn zero_demand_is_a_protocol_violation() {
  let second = TestStreamSource::<i32>::new();
  let publisher = ConcatPublisher::new(emit(vec![1, 2]), Arc::new(second.clone()));
  let probe = Arc::new(TestStreamProbe::new());
  publisher.subscribe(probe.clone());
  probe.request(0);
  probe.assert_error_message("invalid demand request");
}

#[test]
fn zero_demand_tears_both_pipelines_down() {
  let first = TestStreamSource::<i32>::new();
  let second = TestStreamSource::<i32>::new();
  let publisher = ConcatPublisher::new(Arc::new(first.clone()), Arc::new(second.clone()));
  let probe = Arc::new(TestStreamProbe::new());
  publisher.subscribe(probe.clone());
  probe.request(0);
  probe.assert_error_message("invalid demand request");
  assert!(first.is_cancelled());
  assert!(!second.is_subscribed());
}

#[test]
fn switch_on_a_producer_thread_keeps_order_and_demand() {
  let first = TestStreamSource::<i32>::new();
  let publisher = ConcatPublisher::new(Arc::new(first.clone()), emit(vec![2, 3]));
  let probe = Arc::new(TestStreamProbe::new());
  publisher.subscribe(probe.clone());
  probe.request(2);
  let producer = thread::spawn({
    let first = first.clone();
    move || {
      first.push(1);
      first.complete();
    }
  });
  producer.join().unwrap();
  probe.await_items(2);
  probe.assert_items(&[1, 2]);
  probe.assert_not_terminated();
  probe.request(1);
  probe.assert_items(&[1, 2, 3]);
  probe.assert_completed();
}

#[test]
fn racing_requests_never_exceed_total_demand() {
  for _ in 0..200 {
    let publisher = ConcatPublisher::new(emit(vec![1]), emit(vec![2, 3, 4, 5]));
    let probe = Arc::new(TestStreamProbe::new());
    publisher.subscribe(probe.clone());
    let barrier = Arc::new(Barrier::new(2));
    let requesters: Vec<_> = [2u64, 1]
      .into_iter()
      .map(|count| {
        let probe = probe.clone();
        let barrier = barrier.clone();
        thread::spawn(move || {
          barrier.wait();
          probe.request(count);
        })
      })
      .collect();
    for requester in requesters {
      requester.join().unwrap();
    }
    probe.await_items(3);
    probe.assert_items(&[1, 2, 3]);
    probe.assert_not_terminated();
    probe.request(2);
    probe.assert_items(&[1, 2, 3, 4, 5]);
    probe.assert_completed();
  }
}

#[test]
fn empty_pipelines_still_complete() {
  let publisher = ConcatPublisher::new(emit(Vec::new()), emit(Vec::new()));
  let probe = Arc::new(TestStreamProbe::new());
  publisher.subscribe(probe.clone());
  probe.request(1);
  probe.assert_items(&[]);
  probe.assert_completed();
}

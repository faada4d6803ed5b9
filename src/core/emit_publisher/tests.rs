use std::sync::Arc;

use super::EmitPublisher;
use crate::core::testing::TestStreamProbe;
use crate::core::StreamPublisher;

fn subscribed(items: Vec<i32>) -> Arc<TestStreamProbe<i32>> {
  let publisher = EmitPublisher::new(items);
  let probe = Arc::new(TestStreamProbe::new());
  publisher.subscribe(probe.clone());
  probe
}

#[test]
fn emits_nothing_without_demand() {
  let probe = subscribed(vec![1, 2, 3]);
  probe.assert_subscribed();
  probe.assert_items(&[]);
  probe.assert_not_terminated();
}

#[test]
fn honors_bounded_demand() {
  let probe = subscribed(vec![1, 2, 3]);
  probe.request(2);
  probe.assert_items(&[1, 2]);
  probe.assert_not_terminated();
  probe.request(1);
  probe.assert_items(&[1, 2, 3]);
  probe.assert_completed();
}

#[test]
fn unbounded_demand_drains_everything() {
  let probe = subscribed(vec![1, 2, 3]);
  probe.request(u64::MAX);
  probe.assert_items(&[1, 2, 3]);
  probe.assert_completed();
}

#[test]
fn empty_list_completes_on_first_request() {
  let probe = subscribed(Vec::new());
  probe.request(1);
  probe.assert_items(&[]);
  probe.assert_completed();
}

#[test]
fn zero_demand_is_a_protocol_violation() {
  let probe = subscribed(vec![1, 2, 3]);
  probe.request(0);
  probe.assert_error_message("invalid demand request");
  probe.assert_items(&[]);
}

#[test]
fn cancellation_stops_emission() {
  let probe = subscribed(vec![1, 2, 3]);
  probe.request(1);
  probe.assert_items(&[1]);
  probe.cancel();
  probe.request(5);
  probe.assert_items(&[1]);
  probe.assert_not_terminated();
}

#[test]
fn subscriptions_are_independent() {
  let publisher = EmitPublisher::new(vec![1, 2]);
  let first = Arc::new(TestStreamProbe::new());
  let second = Arc::new(TestStreamProbe::new());
  publisher.subscribe(first.clone());
  publisher.subscribe(second.clone());
  first.request(2);
  second.request(1);
  first.assert_items(&[1, 2]);
  second.assert_items(&[1]);
}

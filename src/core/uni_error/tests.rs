use super::UniError;

#[test]
fn renders_absent_item() {
  assert_eq!(UniError::AbsentItem.to_string(), "item is absent");
}

#[test]
fn renders_absent_fallback() {
  assert_eq!(UniError::AbsentFallback.to_string(), "fallback produced no item");
}

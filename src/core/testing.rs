/// Recording subscriber for stream pipelines.
mod test_stream_probe;
/// Manually driven stream publisher.
mod test_stream_source;
/// Recording subscriber for Uni subscriptions.
mod test_uni_probe;

pub use test_stream_probe::TestStreamProbe;
pub use test_stream_source::TestStreamSource;
pub use test_uni_probe::TestUniProbe;

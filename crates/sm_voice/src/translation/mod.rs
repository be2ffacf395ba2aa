mod google;
mod noop;

pub use google::GoogleTranslator;
pub use noop::NoopTranslator;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggerError {
    #[error("unknown log format {0:?} (expected one of: text, json, journald)")]
    InvalidFormat(String),
    #[error("journald output needs Linux and the `journald` feature")]
    JournaldNotSupported,
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
    #[error("cannot install tracing subscriber: {0}")]
    InitializationFailed(String),
    #[error("log level {0:?} is not a valid filter directive")]
    InvalidLogLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            LoggerError::InvalidLogLevel("clusterstate=loud".into()).to_string(),
            r#"log level "clusterstate=loud" is not a valid filter directive"#
        );
        assert_eq!(
            LoggerError::InvalidFormat("xml".into()).to_string(),
            r#"unknown log format "xml" (expected one of: text, json, journald)"#
        );
    }
}

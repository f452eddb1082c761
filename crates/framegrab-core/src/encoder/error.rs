//! Encoder error type.

/// Failure to produce an animation.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The encoder process could not be started (missing binary, permissions).
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The encoder ran and exited unsuccessfully. `code` is `None` if it was
    /// killed by a signal.
    #[error("{program} exited with {}", describe_exit(.code))]
    Exit { program: String, code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {}", c),
        None => "a signal".to_string(),
    }
}

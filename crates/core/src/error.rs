//! Error types for the silhouette core.

use thiserror::Error;

/// Errors produced by engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Width or height was zero when creating an engine.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A closed curve had too few vertices to enclose any area.
    #[error("degenerate curve: {vertices} vertices, need at least 3")]
    DegenerateCurve {
        vertices: usize,
    },

    /// A requested engine name was not recognized by the registry.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// A scene referenced a spawn event outside its step range.
    #[error("spawn event at tick {tick} is beyond the scene's {steps} steps")]
    SpawnOutOfRange {
        tick: usize,
        steps: usize,
    },

    /// An I/O failure while writing a snapshot.
    #[error("io error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let err = EngineError::InvalidDimensions;
        let msg = format!("{err}");
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn degenerate_curve_includes_vertex_count() {
        let err = EngineError::DegenerateCurve { vertices: 2 };
        let msg = format!("{err}");
        assert!(msg.contains('2'), "missing vertex count in: {msg}");
    }

    #[test]
    fn unknown_engine_includes_name() {
        let err = EngineError::UnknownEngine("blob".into());
        let msg = format!("{err}");
        assert!(
            msg.contains("blob"),
            "expected message containing 'blob', got: {msg}"
        );
    }

    #[test]
    fn spawn_out_of_range_includes_tick_and_steps() {
        let err = EngineError::SpawnOutOfRange {
            tick: 500,
            steps: 200,
        };
        let msg = format!("{err}");
        assert!(msg.contains("500"), "missing tick in: {msg}");
        assert!(msg.contains("200"), "missing steps in: {msg}");
    }

    #[test]
    fn io_error_includes_message() {
        let err = EngineError::Io("disk full".into());
        let msg = format!("{err}");
        assert!(msg.contains("disk full"), "missing message in: {msg}");
    }

    #[test]
    fn engine_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EngineError>();
    }

    #[test]
    fn engine_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<EngineError>();
    }
}

//! Error type shared by loading and rendering.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read hive plot document from {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
    #[error("hive plot JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("style key `{key}` has {len} values but element {index} was requested")]
    StyleLength {
        key: String,
        index: usize,
        len: usize,
    },
    #[error("style key `{key}` has an unsupported value: {message}")]
    InvalidStyle { key: String, message: String },
    #[error("edge group {from} -> {to} [{tag}] has {ids} ids but {curves} curves")]
    MissingCurves {
        from: String,
        to: String,
        tag: String,
        ids: usize,
        curves: usize,
    },
    #[error("axis `{axis}` has {x} x coordinates but {y} y coordinates")]
    NodeLength { axis: String, x: usize, y: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

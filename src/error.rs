use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeamDirectoryError {
    #[error("Failed to read team dictionary from {path}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse team dictionary {path}")]
    ParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Duplicate team id in dictionary: {0}")]
    DuplicateId(String),

    #[error("Team entry has an empty id")]
    EmptyId,
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read report {path}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decompress report {path}")]
    DecompressFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Report {0} is not valid UTF-8")]
    NotUtf8(String),

    #[error("Failed to parse existing record {path}")]
    BadRecord {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// Connection-level failure: refused, DNS, timeout. Fatal for the call.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The node answered with a non-success HTTP status.
    ///
    /// Recoverable by contract: the transport makes exactly one attempt and
    /// reports the status, and callers choose their own retry/error policy.
    #[error("node returned HTTP status {0}")]
    Status(reqwest::StatusCode),

    /// JSON that could not be encoded or decoded, including a 2xx response
    /// whose body is not a JSON object.
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The node accepted the request but reported an application error
    /// (an `error` field in an otherwise successful response).
    #[error("node error: {0}")]
    Node(String),

    /// A response lacked a field the wrapper relies on.
    #[error("missing field `{field}` in `{action}` response")]
    MissingField {
        action: &'static str,
        field: &'static str,
    },

    /// A response field was present but could not be interpreted.
    #[error("invalid field `{field}` in `{action}` response: {message}")]
    InvalidField {
        action: &'static str,
        field: &'static str,
        message: String,
    },

    /// A request was built without an action name.
    #[error("request action must not be empty")]
    EmptyAction,
}

impl RpcError {
    /// True for the soft-failure case: the node was reachable but rejected
    /// the call at the HTTP level.
    pub fn is_rejected_status(&self) -> bool {
        matches!(self, RpcError::Status(_))
    }
}

use crate::foundation::span::Span;

/// Convenience result type used across rectbox.
pub type RectResult<T> = Result<T, RectError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum RectError {
    /// A mapping-valued parameter contains a key outside its recognized set.
    #[error("unexpected key \"{key}\" at {span}, valid keys are {}", list_keys(.valid))]
    InvalidKey {
        /// The offending key as written.
        key: String,
        /// Keys accepted by the parameter.
        valid: &'static [&'static str],
        /// Source span of the key token.
        span: Span,
    },

    /// Malformed argument or document syntax.
    #[error("syntax error at {span}: {message}")]
    Syntax {
        /// Human-readable description.
        message: String,
        /// Source span of the offending text.
        span: Span,
    },

    /// A value of the wrong kind was passed to a parameter.
    #[error("type error at {span}: expected {expected}, found {found}")]
    Type {
        /// What the parameter accepts.
        expected: String,
        /// What was actually given.
        found: String,
        /// Source span of the value.
        span: Span,
    },

    /// A named argument that `rect` does not take.
    #[error("unexpected argument \"{name}\" at {span}")]
    UnexpectedArgument {
        /// Argument name.
        name: String,
        /// Source span of the argument name.
        span: Span,
    },

    /// The same named argument was passed twice in one call.
    #[error("duplicate argument \"{name}\" at {span}")]
    DuplicateArgument {
        /// Argument name.
        name: String,
        /// Source span of the second occurrence.
        span: Span,
    },

    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while rasterizing paint instructions.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RectError {
    /// Build a [`RectError::InvalidKey`] value.
    pub fn invalid_key(key: impl Into<String>, valid: &'static [&'static str], span: Span) -> Self {
        Self::InvalidKey {
            key: key.into(),
            valid,
            span,
        }
    }

    /// Build a [`RectError::Syntax`] value.
    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self::Syntax {
            message: message.into(),
            span,
        }
    }

    /// Build a [`RectError::Type`] value.
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>, span: Span) -> Self {
        Self::Type {
            expected: expected.into(),
            found: found.into(),
            span,
        }
    }

    /// Build a [`RectError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RectError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`RectError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Source span the error points at, if it came from source text.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::InvalidKey { span, .. }
            | Self::Syntax { span, .. }
            | Self::Type { span, .. }
            | Self::UnexpectedArgument { span, .. }
            | Self::DuplicateArgument { span, .. } => Some(*span),
            Self::Validation(_) | Self::Serde(_) | Self::Render(_) | Self::Other(_) => None,
        }
    }
}

fn list_keys(keys: &[&str]) -> String {
    let quoted: Vec<String> = keys.iter().map(|k| format!("\"{k}\"")).collect();
    match quoted.as_slice() {
        [] => "none".to_owned(),
        [one] => one.clone(),
        [head @ .., last] => format!("{}, and {last}", head.join(", ")),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

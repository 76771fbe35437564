//! Error types for the component handler.

use ascend_dom::DomError;

/// Which registration field collided with an existing descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictField {
    /// The name is taken by a descriptor for a different component type.
    Name,
    /// The selector belongs to a descriptor with a different name.
    Selector,
    /// The name would shadow the handler's instance-linkage key.
    LinkageKey,
}

impl std::fmt::Display for ConflictField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictField::Name => write!(f, "name"),
            ConflictField::Selector => write!(f, "selector"),
            ConflictField::LinkageKey => write!(f, "linkage key"),
        }
    }
}

/// Errors raised by registration, upgrade and downgrade.
///
/// All of these are fatal for the call that raised them. Cancellation of an
/// upgrade and a disabled engine are not errors and never appear here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// A registration collided with an existing descriptor.
    RegistrationConflict {
        /// The colliding field.
        field: ConflictField,
        /// Name of the descriptor being registered.
        name: String,
        /// Name of the descriptor already holding the field.
        existing: String,
    },
    /// An explicitly requested component name is not registered.
    UnknownComponent {
        /// The requested name.
        name: String,
    },
    /// Malformed input to a handler operation.
    InvalidArgument {
        /// Description of what was wrong.
        reason: String,
    },
    /// The document rejected an operation.
    Dom(DomError),
    /// A component factory reported a failure of its own.
    ComponentFailed {
        /// The component being constructed.
        name: String,
        /// Factory-supplied message.
        message: String,
    },
}

impl HandlerError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        HandlerError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn component_failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        HandlerError::ComponentFailed {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandlerError::RegistrationConflict {
                field,
                name,
                existing,
            } => write!(
                f,
                "Cannot register '{}': {} already registered by '{}'",
                name, field, existing
            ),
            HandlerError::UnknownComponent { name } => {
                write!(f, "No registered component named '{}'", name)
            }
            HandlerError::InvalidArgument { reason } => write!(f, "Invalid argument: {}", reason),
            HandlerError::Dom(err) => write!(f, "Document error: {}", err),
            HandlerError::ComponentFailed { name, message } => {
                write!(f, "Component '{}' failed: {}", name, message)
            }
        }
    }
}

impl std::error::Error for HandlerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HandlerError::Dom(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DomError> for HandlerError {
    fn from(err: DomError) -> Self {
        HandlerError::Dom(err)
    }
}

/// Result type alias for handler operations.
pub type HandlerResult<T> = Result<T, HandlerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use ascend_dom::NodeId;
    use std::error::Error;

    #[test]
    fn test_display_names_the_field() {
        let err = HandlerError::RegistrationConflict {
            field: ConflictField::Selector,
            name: "Toggle".into(),
            existing: "Check".into(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot register 'Toggle': selector already registered by 'Check'"
        );
    }

    #[test]
    fn test_dom_error_source() {
        let err: HandlerError = DomError::NodeNotFound(NodeId(4)).into();
        assert!(err.source().is_some());
        assert!(HandlerError::invalid_argument("x").source().is_none());
    }
}

//! Fatal pass errors.

use thiserror::Error;

/// A failure that invalidates the whole pass. No artifact is written when
/// one of these is raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PassError {
    #[error("unresolved type '{reference}' referenced from {path}")]
    UnresolvedType { reference: String, path: String },

    #[error("'{reference}' takes {expected} type argument(s) but {path} supplies {found}")]
    GenericArity {
        reference: String,
        path: String,
        expected: usize,
        found: usize,
    },

    #[error("variant '{variant}' of closed type '{owner}' is not in the model")]
    UnknownVariant { owner: String, variant: String },

    #[error("cyclic supertype chain: {}", cycle.join(" -> "))]
    CyclicInheritance { cycle: Vec<String> },

    #[error("'{first}' and '{second}' would both be declared as '{name}'")]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },

    #[error("reference to '{reference}' inside namespace '{namespace}' is shadowed by '{shadow}'")]
    ShadowedReference {
        reference: String,
        namespace: String,
        shadow: String,
    },
}

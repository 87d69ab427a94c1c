use crate::specimen::SpecimenKind;
use std::borrow::Cow;

/// A specialized [`TaxonomyError`] enum of this crate.
#[insecta_derive::insecta_error]
pub enum TaxonomyError {
    /// A hidden field was looked up by name instead of through its accessor.
    #[error("Hidden attribute '{attribute}' is not accessible on {kind}{}", format_context(.context))]
    HiddenAttribute {
        attribute: Cow<'static, str>,
        kind: SpecimenKind,
        context: Option<Cow<'static, str>>,
    },

    /// The kind has no attribute with this name.
    #[error("{kind} has no attribute '{attribute}'{}", format_context(.context))]
    UnknownAttribute {
        attribute: Cow<'static, str>,
        kind: SpecimenKind,
        context: Option<Cow<'static, str>>,
    },

    /// An abstract behavior was invoked on a kind that does not implement it.
    #[error("{kind} cannot {behavior}: the behavior is abstract for this kind{}", format_context(.context))]
    AbstractBehavior {
        behavior: Cow<'static, str>,
        kind: SpecimenKind,
        context: Option<Cow<'static, str>>,
    },

    /// The output writer failed.
    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal taxonomy error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

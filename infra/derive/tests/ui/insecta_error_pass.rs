use insecta_derive::insecta_error;
use std::borrow::Cow;

#[insecta_error]
pub enum SampleError {
    #[error("I/O error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Hidden attribute '{attribute}'{}", format_context(.context))]
    Hidden { attribute: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let from_str: SampleError = "boom".into();
    assert!(matches!(from_str, SampleError::Internal { .. }));

    let from_io: SampleError = std::io::Error::other("disk").into();
    assert!(matches!(from_io, SampleError::Io { context: None, .. }));
}

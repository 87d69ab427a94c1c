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

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn write_line() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("closed pipe"))
}

fn run() -> Result<(), SampleError> {
    write_line().context("Writing separator")
}

fn main() {
    let err = run().expect_err("writer fails");
    assert_eq!(err.to_string(), "I/O error (Writing separator): closed pipe");

    let relabeled = Err::<(), _>(SampleError::from("lost")).context("Second attempt");
    let message = relabeled.expect_err("still an error").to_string();
    assert_eq!(message, "Internal error (Second attempt): lost");
}

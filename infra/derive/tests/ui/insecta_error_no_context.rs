use insecta_derive::insecta_error;

#[insecta_error]
pub enum SampleError {
    Io { source: std::io::Error },
}

fn main() {}

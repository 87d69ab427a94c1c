use insecta_logger::{LevelFilter, Logger};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let _logger =
        Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).level(LevelFilter::WARN).init()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    insecta_taxonomy::demo::run(&mut out)?;
    out.flush()?;

    Ok(())
}

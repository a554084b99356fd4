use anyhow::Result;
use pair_sum::{demo, DemoConfig};

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the result line
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = DemoConfig::default();
    let mut stdout = std::io::stdout().lock();
    demo::run(&config, &mut stdout)?;

    Ok(())
}

use anyhow::Context;
use clap::Parser;
use summator::Summator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 计算两个数之和
#[derive(Parser, Debug)]
#[command(name = "summator", version, about = "Print the sum of two numbers")]
struct Cli {
    /// First operand
    #[arg(allow_hyphen_values = true)]
    a: String,
    /// Second operand
    #[arg(allow_hyphen_values = true)]
    b: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 日志写到 stderr，stdout 只输出结果
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("summator v{}", env!("CARGO_PKG_VERSION"));

    let sum = Summator::sum_operands(&cli.a, &cli.b)
        .with_context(|| format!("cannot sum `{}` and `{}`", cli.a, cli.b))?;
    println!("{sum}");
    Ok(())
}

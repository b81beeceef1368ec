use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// RUST_LOG 未設定時使用的過濾規則
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "salary_stats=debug,info"
    } else {
        "salary_stats=info,warn"
    }
}

/// 日誌寫到 stderr，stdout 只留給報表。
/// 抓取時的 `source` / `specialization` span 欄位會附在每一行前面。
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .compact();

    tracing_subscriber::registry().with(filter).with(layer).init();
}

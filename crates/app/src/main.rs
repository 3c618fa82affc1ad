pub fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = linecount::Config::from_env();
    let paths: Vec<std::path::PathBuf> = std::env::args_os()
        .skip(1)
        .map(std::path::PathBuf::from)
        .collect();

    if paths.is_empty() {
        log::warn!("no input files given");
    }

    let stdout = std::io::stdout();
    let summary = linecount::run(config, &paths, &mut stdout.lock())?;

    // Each failure was already logged by `run`
    if !summary.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

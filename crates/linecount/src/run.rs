/// Outcome of one [`run`] over a list of paths.
#[derive(Debug, Default)]
pub struct Summary {
    pub reports: Vec<crate::count::Report>,
    pub failures: Vec<crate::errors::CountError>,
    pub elapsed: std::time::Duration,
}

impl Summary {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Counts lines in every path and writes one report line per file to `out`.
///
/// The banner for `config.mode` comes first and the elapsed time in
/// nanoseconds last. A file that cannot be read is logged and recorded in
/// [`Summary::failures`]; the remaining paths are still processed.
///
/// # Errors
///
/// - `std::io::Error` only if writing to `out` fails.
pub fn run<I, P, W>(config: crate::config::Config, paths: I, out: &mut W) -> std::io::Result<Summary>
where
    I: IntoIterator<Item = P>,
    P: AsRef<std::path::Path>,
    W: std::io::Write,
{
    let mut summary = Summary::default();

    writeln!(out, "{}", config.mode.banner())?;

    let start = std::time::Instant::now();
    for path in paths {
        match crate::count::count(config.mode, path.as_ref()) {
            Ok(report) => {
                writeln!(out, "{report}")?;
                summary.reports.push(report);
            }
            Err(err) => {
                log::error!("{err}");
                summary.failures.push(err);
            }
        }
    }
    summary.elapsed = start.elapsed();

    writeln!(out, "{} nanoseconds elapsed", summary.elapsed.as_nanos())?;
    out.flush()?;

    log::debug!(
        "counted {} file(s), {} failure(s)",
        summary.reports.len(),
        summary.failures.len()
    );

    Ok(summary)
}

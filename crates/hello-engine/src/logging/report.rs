/// Writes a non-fatal windowing/graphics error to the diagnostic stream.
///
/// Runtime errors reported here never stop the render loop.
pub fn report_error(what: &str, err: &dyn std::error::Error) {
    log::error!("Error: {what}: {err}");
}

/// Like [`report_error`] for conditions that degrade output but are expected
/// on some platforms (e.g. vsync not honored).
pub fn report_warning(what: &str, err: &dyn std::error::Error) {
    log::warn!("{what}: {err}");
}

/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to provide user feedback while the graph is being resolved.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Starts an indeterminate activity (a spinner on a terminal)
    fn start(&self, message: &str) {
        self.report(message);
    }

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation, ending any running activity
    fn report_completion(&self, message: &str);
}

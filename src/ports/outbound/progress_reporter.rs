/// ProgressReporter port for user-facing progress output
///
/// All run-time messages of the tool go through this port so they stay
/// off stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);

    /// Marks the start of a blocking step (e.g. waiting on an external process)
    fn start_task(&self, message: &str);

    /// Marks the end of the step started by [`ProgressReporter::start_task`]
    fn finish_task(&self);
}

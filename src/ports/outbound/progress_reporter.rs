/// ProgressReporter port for user feedback during long scans
///
/// This port abstracts progress output (e.g. a terminal progress bar on
/// stderr) so pulling and scanning dozens of images stays observable.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a known number of images
    ///
    /// # Arguments
    /// * `current` - Images finished so far
    /// * `total` - Total images to process
    /// * `message` - Optional label for the image being analyzed
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the whole run
    fn report_completion(&self, message: &str);
}

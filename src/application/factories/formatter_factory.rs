use crate::adapters::outbound::formatters::{JsonFormatter, TreeFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ForestFormatter;

/// Factory for creating forest formatters
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// `colored` only affects the tree format; JSON is never colored.
    ///
    /// # Examples
    /// ```
    /// use xpgraph::application::dto::OutputFormat;
    /// use xpgraph::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, colored: bool) -> Box<dyn ForestFormatter> {
        match format {
            OutputFormat::Tree => Box::new(TreeFormatter::new(colored)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use xpgraph::application::dto::OutputFormat;
    /// use xpgraph::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Tree => "📝 Generating tree output...",
            OutputFormat::Json => "📝 Generating JSON output...",
        }
    }
}

//! Generation options.

/// Default name of the per-class date/time factory slot.
pub const DEFAULT_HELPER_FIELD: &str = "DATATYPE_FACTORY";

/// Default type of the per-class date/time factory slot.
pub const DEFAULT_HELPER_TYPE: &str = "DatatypeFactory";

/// Options shared by the pipeline and its plugins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Emit informational log lines for every change made.
    pub verbose: bool,
    /// Option names of the plugins to run, in order.
    pub enabled_plugins: Vec<String>,
    /// Name of the static slot holding the date/time factory.
    pub helper_field_name: String,
    /// Type of the static slot holding the date/time factory.
    pub helper_type: String,
    /// Overrides the generated module name.
    pub package: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            verbose: false,
            enabled_plugins: Vec::new(),
            helper_field_name: DEFAULT_HELPER_FIELD.to_string(),
            helper_type: DEFAULT_HELPER_TYPE.to_string(),
            package: None,
        }
    }
}

impl Options {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets verbose logging.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enables a plugin by option name (a leading `-` is ignored).
    #[must_use]
    pub fn enable(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let name = name.trim_start_matches('-').to_string();
        if !self.enabled_plugins.contains(&name) {
            self.enabled_plugins.push(name);
        }
        self
    }

    /// Returns true if the plugin with the given option name is enabled.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        let name = name.trim_start_matches('-');
        self.enabled_plugins.iter().any(|p| p == name)
    }

    /// Sets the name of the date/time factory slot.
    #[must_use]
    pub fn helper_field_name(mut self, name: impl Into<String>) -> Self {
        self.helper_field_name = name.into();
        self
    }

    /// Sets the type of the date/time factory slot.
    #[must_use]
    pub fn helper_type(mut self, type_name: impl Into<String>) -> Self {
        self.helper_type = type_name.into();
        self
    }

    /// Sets the generated module name.
    #[must_use]
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }
}

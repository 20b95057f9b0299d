//! Plugin contract for class-model post-processing.

use ironxsd_schema::ClassModel;

use crate::diagnostic::DiagnosticSink;
use crate::error::CodegenError;
use crate::fixed_value::FixedValuePlugin;
use crate::options::Options;

/// A pass that rewrites the class model before rendering.
pub trait Plugin {
    /// Option name that enables the plugin, without the leading `-`.
    fn option_name(&self) -> &'static str;

    /// One-line help text.
    fn usage(&self) -> String;

    /// Runs the plugin over the model.
    ///
    /// Recoverable problems go to `sink`. Returns `Ok(false)` if the plugin
    /// considers the run failed without a hard error.
    ///
    /// # Errors
    /// Returns `CodegenError` on a fault that must stop generation.
    fn run(
        &self,
        model: &mut ClassModel,
        options: &Options,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<bool, CodegenError>;
}

/// Returns every known plugin.
#[must_use]
pub fn registry() -> Vec<Box<dyn Plugin>> {
    vec![Box::new(FixedValuePlugin::new())]
}

/// Finds the plugin answering to `option` (a leading `-` is ignored).
#[must_use]
pub fn find(option: &str) -> Option<Box<dyn Plugin>> {
    let option = option.trim_start_matches('-');
    registry().into_iter().find(|p| p.option_name() == option)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_plugin() {
        assert!(find("Xfixed-value").is_some());
        assert!(find("-Xfixed-value").is_some());
        assert!(find("Xunknown").is_none());
    }

    #[test]
    fn test_registry_usage_lines() {
        let plugins = registry();
        assert_eq!(plugins.len(), 1);
        assert!(plugins[0].usage().starts_with("  -Xfixed-value"));
    }
}

use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration for the UI server, populated from environment
/// variables in `main`. No config files, no CLI flags.
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Directory holding the page templates (`*.html`).
    pub template_root: PathBuf,
    /// Directory holding the `css/`, `img/` and `js/` static subtrees.
    pub asset_root: PathBuf,
    pub max_body_bytes: usize,
    pub shutdown_drain: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            template_root: PathBuf::from("crates/kable-ui-server/templates"),
            asset_root: PathBuf::from("crates/kable-ui-server/assets"),
            max_body_bytes: 16 * 1024,
            shutdown_drain: Duration::from_secs(5),
        }
    }
}

pub fn validate_startup_config(ui: &UiConfig) -> Result<(), String> {
    if ui.max_body_bytes == 0 {
        return Err("max body bytes must be > 0".to_string());
    }
    if ui.template_root.as_os_str().is_empty() || ui.asset_root.as_os_str().is_empty() {
        return Err("template and asset roots must not be empty".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_config_validation_rejects_zero_body_limit() {
        let ui = UiConfig {
            max_body_bytes: 0,
            ..UiConfig::default()
        };
        let err = validate_startup_config(&ui).expect_err("zero body limit");
        assert!(err.contains("body bytes"));
    }

    #[test]
    fn startup_config_validation_accepts_defaults() {
        validate_startup_config(&UiConfig::default()).expect("defaults are valid");
    }
}

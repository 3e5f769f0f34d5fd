//! Generator settings.
//!
//! Optional TOML file; every key has a default:
//!
//! ```toml
//! max_der_order = 1
//! space_families = ["BSplineSpace", "NURBSSpace"]
//!
//! [templates]
//! derivative = "Tensor<dim, order, tensor::covariant, Tensor<range, rank, tensor::contravariant, Tdouble>>"
//! value = "Tensor<range, rank, tensor::contravariant, Tdouble>"
//! ```

use crate::error::SettingsError;
use crate::template::{DEFAULT_DERIVATIVE_TEMPLATE, DEFAULT_VALUE_TEMPLATE, Template};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SPACE_FAMILIES: [&str; 2] = ["BSplineSpace", "NURBSSpace"];

/// Highest derivative order accepted from any source. Shape lists grow
/// linearly with the order.
pub const MAX_DER_ORDER: u32 = 32;

/// Templates for derivative and value tensor shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeTemplates {
    pub derivative: Template,
    pub value: Template,
}

impl Default for ShapeTemplates {
    fn default() -> Self {
        Self {
            derivative: Template::new(DEFAULT_DERIVATIVE_TEMPLATE),
            value: Template::new(DEFAULT_VALUE_TEMPLATE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    /// Fallback when the invocation does not name a maximum derivative order.
    pub max_der_order: Option<u32>,

    /// Reference space families, in emission order.
    pub space_families: Vec<String>,

    pub templates: ShapeTemplates,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            max_der_order: None,
            space_families: DEFAULT_SPACE_FAMILIES.iter().map(|s| s.to_string()).collect(),
            templates: ShapeTemplates::default(),
        }
    }
}

impl GeneratorSettings {
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Self =
            toml::from_str(text).map_err(|e| SettingsError::Parse(e.to_string()))?;
        settings.validate()?;
        settings.warn_incomplete_templates();
        Ok(settings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if let Some(order) = self.max_der_order
            && order > MAX_DER_ORDER
        {
            return Err(SettingsError::Invalid {
                key: "max_der_order",
                message: format!("{order} exceeds {MAX_DER_ORDER}"),
            });
        }
        if let Some(family) = self.space_families.iter().find(|f| f.trim().is_empty()) {
            return Err(SettingsError::Invalid {
                key: "space_families",
                message: format!("empty family name {family:?}"),
            });
        }
        Ok(())
    }

    fn warn_incomplete_templates(&self) {
        for (name, template) in [
            ("derivative", &self.templates.derivative),
            ("value", &self.templates.value),
        ] {
            let missing = template.missing_placeholders();
            if !missing.is_empty() {
                let missing: Vec<&str> = missing.iter().map(|p| p.token()).collect();
                tracing::warn!(
                    template = name,
                    missing = %missing.join(","),
                    "template does not mention every placeholder"
                );
            }
        }
    }
}

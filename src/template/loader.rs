use crate::template::model::Template;
use crate::template::registry::TemplateRegistry;
use serde::{Deserialize, Serialize};

/// Presentation mode requested by the rendering surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackMode {
    /// Full-screen reveal sequence.
    #[default]
    Cinematic,
    /// Interactive inspection after the reveal.
    Studio,
    /// Small inline thumbnail.
    Preview,
}

/// Request to load a template, as sent by the rendering surface.
///
/// `mode` and `trigger_on_load` travel with the request but are interpreted by the caller, not
/// by the lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadConfig {
    /// Id of the template to resolve.
    pub template_id: String,
    /// Requested presentation mode; `cinematic` when omitted.
    #[serde(default)]
    pub mode: PlaybackMode,
    /// Overrides the template's `autoTrigger` flag when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_on_load: Option<bool>,
}

impl LoadConfig {
    /// Request `template_id` in `mode` without a trigger override.
    pub fn new(template_id: impl Into<String>, mode: PlaybackMode) -> Self {
        Self {
            template_id: template_id.into(),
            mode,
            trigger_on_load: None,
        }
    }

    /// Override the template's own auto-trigger flag.
    pub fn trigger_on_load(mut self, trigger: bool) -> Self {
        self.trigger_on_load = Some(trigger);
        self
    }
}

/// Resolve the template named by `config`, or `None` when the id is not registered.
pub fn load_template<'r>(
    registry: &'r TemplateRegistry,
    config: &LoadConfig,
) -> Option<&'r Template> {
    let found = registry.get(&config.template_id);
    if found.is_none() {
        tracing::debug!(template_id = %config.template_id, mode = ?config.mode, "template not found");
    }
    found
}

/// Entry point handed to rendering surfaces: a borrowed registry plus [`load_template`].
#[derive(Clone, Copy, Debug)]
pub struct TemplateLoader<'r> {
    registry: &'r TemplateRegistry,
}

impl<'r> TemplateLoader<'r> {
    /// Loader over `registry`.
    pub fn new(registry: &'r TemplateRegistry) -> Self {
        Self { registry }
    }

    /// See [`load_template`].
    pub fn load(&self, config: &LoadConfig) -> Option<&'r Template> {
        load_template(self.registry, config)
    }

    /// Registry backing this loader.
    pub fn registry(&self) -> &'r TemplateRegistry {
        self.registry
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/loader.rs"]
mod tests;

use crate::foundation::error::{CardMotionError, CardMotionResult};
use crate::template::builtin;
use crate::template::model::Template;
use anyhow::Context as _;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Immutable id -> [`Template`] catalog.
///
/// Built once at startup through [`TemplateRegistryBuilder`] and then passed by reference to
/// whatever samples templates. Nothing mutates it afterwards, so shared references can be
/// handed to any number of threads.
#[derive(Clone, Debug, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, Template>,
}

impl TemplateRegistry {
    /// Start an empty builder.
    pub fn builder() -> TemplateRegistryBuilder {
        TemplateRegistryBuilder::default()
    }

    /// Registry holding the templates shipped with this crate.
    #[tracing::instrument]
    pub fn builtin() -> CardMotionResult<Self> {
        let mut b = Self::builder();
        b.register_builtin()?;
        Ok(b.build())
    }

    /// Build a registry from a JSON array of templates.
    pub fn from_reader<R: std::io::Read>(r: R) -> CardMotionResult<Self> {
        let mut b = Self::builder();
        b.extend_from_reader(r)?;
        Ok(b.build())
    }

    /// Build a registry from a JSON catalog file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CardMotionResult<Self> {
        let mut b = Self::builder();
        b.extend_from_path(path)?;
        Ok(b.build())
    }

    /// Look up a template by id.
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    /// Return `true` when `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Registered ids in lexicographic order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Registered templates ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Return `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Accumulates validated templates; rejects duplicate ids.
#[derive(Debug, Default)]
pub struct TemplateRegistryBuilder {
    templates: BTreeMap<String, Template>,
}

impl TemplateRegistryBuilder {
    /// Validate `template` and add it.
    ///
    /// Fails when the template is invalid or its id is already registered.
    pub fn register(&mut self, template: Template) -> CardMotionResult<()> {
        self.admit(&template)?;
        self.insert(template);
        Ok(())
    }

    fn admit(&self, template: &Template) -> CardMotionResult<()> {
        template.validate()?;
        if self.templates.contains_key(&template.id) {
            return Err(duplicate(&template.id));
        }
        Ok(())
    }

    fn insert(&mut self, template: Template) {
        tracing::trace!(id = %template.id, keyframes = template.keyframes.len(), "registered template");
        self.templates.insert(template.id.clone(), template);
    }

    /// Add every built-in template.
    pub fn register_builtin(&mut self) -> CardMotionResult<()> {
        for t in builtin::templates() {
            self.register(t)?;
        }
        Ok(())
    }

    /// Add every template from a JSON array; returns how many were added.
    ///
    /// The catalog is all or nothing: if any template is invalid or its id is taken (here or
    /// earlier in the same array), nothing is added.
    pub fn extend_from_reader<R: std::io::Read>(&mut self, r: R) -> CardMotionResult<usize> {
        let templates: Vec<Template> = serde_json::from_reader(r)
            .map_err(|e| CardMotionError::serde(format!("parse template catalog JSON: {e}")))?;

        {
            let mut seen = BTreeSet::new();
            for t in &templates {
                self.admit(t)?;
                if !seen.insert(t.id.as_str()) {
                    return Err(duplicate(&t.id));
                }
            }
        }

        let n = templates.len();
        for t in templates {
            self.insert(t);
        }
        Ok(n)
    }

    /// Add every template from a JSON catalog file; returns how many were added.
    #[tracing::instrument(skip_all)]
    pub fn extend_from_path(&mut self, path: impl AsRef<Path>) -> CardMotionResult<usize> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open template catalog '{}'", path.display()))?;
        let n = self.extend_from_reader(BufReader::new(f))?;
        tracing::debug!(path = %path.display(), count = n, "loaded template catalog");
        Ok(n)
    }

    /// Freeze into an immutable registry.
    pub fn build(self) -> TemplateRegistry {
        tracing::info!(count = self.templates.len(), "template registry ready");
        TemplateRegistry {
            templates: self.templates,
        }
    }
}

fn duplicate(id: &str) -> CardMotionError {
    CardMotionError::registry(format!("duplicate template id '{id}'"))
}

#[cfg(test)]
#[path = "../../tests/unit/template/registry.rs"]
mod tests;

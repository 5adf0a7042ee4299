//! Template loading and rendering.
//!
//! Templates are minijinja. The built-in one mirrors what most READMEs
//! need; a package directory can replace it with `.README.template.md` or
//! an explicitly flagged file. Loaded templates are compiled once per run
//! inside a [`TemplateCache`] owned by the caller; there is no process-wide
//! template state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use minijinja::{Environment, Value};

/// Template file looked up in each package directory when no --template
/// flag is given.
pub const DEFAULT_TEMPLATE_FILE: &str = ".README.template.md";

const BUILTIN_NAME: &str = "builtin";

pub const BUILTIN_TEMPLATE: &str = r#"<!-- DO NOT EDIT. -->
<!-- Automatically generated by godoc-readme. -->

# {{ title }}{% if library %} [![Go Reference](https://pkg.go.dev/badge/{{ import_path }}.svg)](https://pkg.go.dev/{{ import_path }}){% endif %}{% if travis %} [![Build Status](https://travis-ci.org/{{ repo_path }}.png?branch=master)](https://travis-ci.org/{{ repo_path }}){% endif %}

{% if commands %}# Install

```shell
{% for cmd in commands %}go install {{ cmd }}
{% endfor %}```

{% endif %}{% if library %}# Import

```go
import "{{ import_path }}"
```

{% endif %}# Overview

{{ doc }}
{% if bugs %}# Bugs

{% for bug in bugs %}* {{ bug }}
{% endfor %}{% endif %}"#;

/// Compiled templates for one generation run.
///
/// Keyed by template file path so that a recursive run over many package
/// directories sharing one template compiles it once. The cache lives and
/// dies with the run; separate runs never share state.
pub struct TemplateCache {
    env: Environment<'static>,
    loaded: HashMap<PathBuf, String>,
}

impl TemplateCache {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        // Generated files end with the template's final newline.
        env.set_keep_trailing_newline(true);
        env.add_template(BUILTIN_NAME, BUILTIN_TEMPLATE)
            .context("built-in template is invalid")?;
        Ok(Self {
            env,
            loaded: HashMap::new(),
        })
    }

    /// Picks the template for one package directory and returns its cache
    /// name for [`render`](Self::render).
    ///
    /// An explicitly requested template is taken as given; a relative path
    /// resolves against the working directory, so one `--template` file
    /// serves every directory of a recursive run. It must exist. The
    /// per-directory default file and the built-in are fallbacks.
    pub fn resolve(&mut self, dir: &Path, explicit: Option<&Path>) -> Result<String> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("failed to open template file: {}", path.display());
                }
                self.load(path)
            }
            None => {
                let default = dir.join(DEFAULT_TEMPLATE_FILE);
                if default.exists() {
                    self.load(&default)
                } else {
                    Ok(BUILTIN_NAME.to_string())
                }
            }
        }
    }

    pub fn render(&self, name: &str, context: &std::collections::BTreeMap<String, Value>) -> Result<String> {
        let template = self
            .env
            .get_template(name)
            .with_context(|| format!("template {name} not loaded"))?;
        template
            .render(context)
            .with_context(|| format!("failed to render template {name}"))
    }

    fn load(&mut self, path: &Path) -> Result<String> {
        if let Some(name) = self.loaded.get(path) {
            return Ok(name.clone());
        }

        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read template file {}", path.display()))?;
        let name = path.display().to_string();
        self.env
            .add_template_owned(name.clone(), source)
            .with_context(|| format!("failed to parse template {}", path.display()))?;
        self.loaded.insert(path.to_path_buf(), name.clone());
        Ok(name)
    }
}

//! Template variable assembly.
//!
//! Everything the README template can reference is gathered here into
//! [`PackageDoc`] and turned into a minijinja context. The documentation
//! body is the engine's rendered Markdown; examples and bug notices pass
//! through untouched apart from the fixed Code/Output framing.

use std::collections::BTreeMap;

use chrono::Local;
use godoc_readme_engine::{render_markdown, synopsis};
use minijinja::Value;
use serde::Serialize;

use crate::gopkg::{GoExample, GoPackage};

#[derive(Debug, Clone, Serialize)]
pub struct Example {
    pub name: String,
    /// `Code:` heading plus a go-fenced rendering of the example body.
    pub code: String,
    /// `Output:` heading plus a plain fence, or empty when the example
    /// declares no expected output.
    pub output: String,
}

/// All template variables for one package directory.
#[derive(Debug, Clone, Serialize)]
pub struct PackageDoc {
    pub name: String,
    pub title: String,
    pub synopsis: String,
    /// The documentation body, already rendered to Markdown.
    pub doc: String,
    pub import_path: String,
    /// Import path without its first component (host), the usual
    /// repository-relative path.
    pub repo_path: String,
    pub bugs: Vec<String>,
    pub commands: Vec<String>,
    pub library: bool,
    pub command: bool,
    pub travis: bool,
    /// Today in YYYY.MM.DD form.
    pub today: String,
    pub examples: BTreeMap<String, Example>,
}

impl PackageDoc {
    pub fn new(pkg: &GoPackage, title: Option<&str>) -> Self {
        // A main package has no usable name of its own; its directory does.
        let name = if pkg.is_main {
            pkg.dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| pkg.name.clone())
        } else {
            pkg.name.clone()
        };

        let examples = pkg
            .examples
            .iter()
            .map(|ex| (ex.name.clone(), render_example(ex)))
            .collect();

        Self {
            title: title.unwrap_or(&name).to_string(),
            synopsis: synopsis(&pkg.doc_text),
            doc: render_markdown(&pkg.doc_text),
            import_path: pkg.import_path.clone(),
            repo_path: repo_path(&pkg.import_path),
            bugs: pkg.bugs.clone(),
            commands: pkg.commands.clone(),
            library: !pkg.is_main,
            command: pkg.is_main,
            travis: pkg.has_travis,
            today: Local::now().format("%Y.%m.%d").to_string(),
            examples,
            name,
        }
    }

    /// Builds the template context: every field by name, then the extra
    /// defines on top (a define can shadow a built-in variable).
    pub fn context(&self, defs: &BTreeMap<String, String>) -> BTreeMap<String, Value> {
        let mut ctx = BTreeMap::from([
            ("name".to_string(), Value::from(self.name.clone())),
            ("title".to_string(), Value::from(self.title.clone())),
            ("synopsis".to_string(), Value::from(self.synopsis.clone())),
            ("doc".to_string(), Value::from(self.doc.clone())),
            (
                "import_path".to_string(),
                Value::from(self.import_path.clone()),
            ),
            ("repo_path".to_string(), Value::from(self.repo_path.clone())),
            ("bugs".to_string(), Value::from_serialize(&self.bugs)),
            ("commands".to_string(), Value::from_serialize(&self.commands)),
            ("library".to_string(), Value::from(self.library)),
            ("command".to_string(), Value::from(self.command)),
            ("travis".to_string(), Value::from(self.travis)),
            ("today".to_string(), Value::from(self.today.clone())),
            ("examples".to_string(), Value::from_serialize(&self.examples)),
        ]);
        for (key, value) in defs {
            ctx.insert(key.clone(), Value::from(value.clone()));
        }
        ctx
    }
}

/// Strips the first path component: github.com/golang/go -> golang/go.
fn repo_path(import_path: &str) -> String {
    match import_path.split_once('/') {
        Some((_, rest)) => rest.to_string(),
        None => String::new(),
    }
}

fn render_example(ex: &GoExample) -> Example {
    Example {
        name: ex.name.replace('_', " "),
        code: format!("Code:\n\n```go\n{}\n```\n", ex.code),
        output: if ex.output.is_empty() {
            String::new()
        } else {
            format!("Output:\n\n```\n{}\n```\n", ex.output)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn library_pkg() -> GoPackage {
        GoPackage {
            dir: PathBuf::from("/src/demo"),
            name: "demo".to_string(),
            is_main: false,
            doc_text: "Package demo does things. More prose here.\n".to_string(),
            bugs: vec!["it leaks".to_string()],
            examples: vec![GoExample {
                name: "Greet_loudly".to_string(),
                code: "fmt.Println(Greet())".to_string(),
                output: "HELLO".to_string(),
            }],
            import_path: "github.com/acme/demo".to_string(),
            commands: vec![],
            has_travis: true,
        }
    }

    #[test]
    fn library_fields() {
        let doc = PackageDoc::new(&library_pkg(), None);
        assert_eq!(doc.name, "demo");
        assert_eq!(doc.title, "demo");
        assert!(doc.library);
        assert!(!doc.command);
        assert_eq!(doc.repo_path, "acme/demo");
        assert_eq!(doc.synopsis, "Package demo does things.");
        assert_eq!(doc.doc, "Package demo does things. More prose here.\n\n");
    }

    #[test]
    fn title_flag_overrides_name() {
        let doc = PackageDoc::new(&library_pkg(), Some("Demo Tool"));
        assert_eq!(doc.title, "Demo Tool");
        assert_eq!(doc.name, "demo");
    }

    #[test]
    fn main_package_takes_directory_name() {
        let mut pkg = library_pkg();
        pkg.name = "main".to_string();
        pkg.is_main = true;
        pkg.commands = vec![pkg.import_path.clone()];

        let doc = PackageDoc::new(&pkg, None);
        assert_eq!(doc.name, "demo");
        assert!(doc.command);
        assert!(!doc.library);
    }

    #[test]
    fn example_rendering_frames_code_and_output() {
        let doc = PackageDoc::new(&library_pkg(), None);
        let ex = &doc.examples["Greet_loudly"];
        assert_eq!(ex.name, "Greet loudly");
        assert_eq!(ex.code, "Code:\n\n```go\nfmt.Println(Greet())\n```\n");
        assert_eq!(ex.output, "Output:\n\n```\nHELLO\n```\n");
    }

    #[test]
    fn defines_shadow_builtins() {
        let doc = PackageDoc::new(&library_pkg(), None);
        let defs = BTreeMap::from([("title".to_string(), "Shadowed".to_string())]);
        let ctx = doc.context(&defs);
        assert_eq!(ctx["title"].as_str(), Some("Shadowed"));
    }
}

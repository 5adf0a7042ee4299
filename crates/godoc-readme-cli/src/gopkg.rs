//! Go package discovery without a Go toolchain.
//!
//! Reads the `.go` files of a directory line by line and pulls out the
//! facts the README needs: package name, the doc comment preceding the
//! package clause, `BUG(who):` notes, `Example` functions from test files,
//! and the import path derived from the nearest `go.mod`. The source code
//! itself is never parsed or validated; only its comments and a handful of
//! fixed line shapes matter here.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PkgError {
    #[error("no Go source files in {0}")]
    NoGoFiles(PathBuf),
    #[error("no package clause found under {0}")]
    NoPackageClause(PathBuf),
    #[error("no go.mod found in {0} or any parent directory")]
    NoModule(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Facts gathered from one directory of Go sources.
#[derive(Debug, Clone)]
pub struct GoPackage {
    pub dir: PathBuf,
    /// Name from the package clause; `main` marks a command.
    pub name: String,
    pub is_main: bool,
    /// Doc comments preceding the package clauses, markers stripped,
    /// blank-line separated when several files carry one.
    pub doc_text: String,
    pub bugs: Vec<String>,
    pub examples: Vec<GoExample>,
    pub import_path: String,
    /// Import paths of `main` packages: the directory itself when it is
    /// one, plus any `cmd/*` subdirectory that is.
    pub commands: Vec<String>,
    pub has_travis: bool,
}

/// An `Example` function lifted from a `_test.go` file.
#[derive(Debug, Clone)]
pub struct GoExample {
    pub name: String,
    pub code: String,
    pub output: String,
}

static BUG_NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^BUG\([^)]+\):\s*(.*)$").expect("bug note pattern"));

/// Scans one directory for a Go package.
pub fn scan_package(dir: &Path) -> Result<GoPackage, PkgError> {
    let (sources, tests) = go_files(dir)?;
    if sources.is_empty() {
        return Err(PkgError::NoGoFiles(dir.to_path_buf()));
    }

    let mut name: Option<String> = None;
    let mut docs: Vec<String> = vec![];
    let mut bugs: Vec<String> = vec![];
    for path in &sources {
        let facts = scan_source(&fs::read_to_string(path)?);
        if name.is_none() {
            name = facts.package_name;
        }
        if !facts.doc.is_empty() {
            docs.push(facts.doc);
        }
        bugs.extend(facts.bugs);
    }
    let name = name.ok_or_else(|| PkgError::NoPackageClause(dir.to_path_buf()))?;
    let is_main = name == "main";

    let mut examples = vec![];
    for path in &tests {
        examples.extend(scan_examples(&fs::read_to_string(path)?));
    }

    let import_path = import_path(dir)?;

    let mut commands = vec![];
    if is_main {
        commands.push(import_path.clone());
    }
    commands.extend(cmd_subpackages(dir, &import_path));

    Ok(GoPackage {
        dir: dir.to_path_buf(),
        name,
        is_main,
        doc_text: docs.join("\n"),
        bugs,
        examples,
        import_path,
        commands,
        has_travis: dir.join(".travis.yml").exists(),
    })
}

/// Lists directories under `root` containing Go source files, skipping
/// dot-directories. Used by the recursive mode.
pub fn go_dir_list(root: &Path) -> Result<Vec<PathBuf>, PkgError> {
    let mut dirs = vec![];
    follow(root, &mut dirs)?;
    dirs.sort();
    Ok(dirs)
}

fn follow(dir: &Path, dirs: &mut Vec<PathBuf>) -> Result<(), PkgError> {
    let mut has_go = false;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if path.is_dir() {
            if !file_name.starts_with('.') {
                follow(&path, dirs)?;
            }
        } else if file_name.ends_with(".go") {
            has_go = true;
        }
    }
    if has_go {
        dirs.push(dir.to_path_buf());
    }
    Ok(())
}

fn go_files(dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>), PkgError> {
    let mut sources = vec![];
    let mut tests = vec![];
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if path.is_dir() || !file_name.ends_with(".go") {
            continue;
        }
        if file_name.ends_with("_test.go") {
            tests.push(path);
        } else {
            sources.push(path);
        }
    }
    sources.sort();
    tests.sort();
    Ok((sources, tests))
}

#[derive(Debug, Default)]
struct SourceFacts {
    package_name: Option<String>,
    doc: String,
    bugs: Vec<String>,
}

/// Single pass over one source file: tracks the current contiguous line
/// comment block; the block adjacent to the package clause is the doc
/// comment, any block opening with `BUG(who):` is a bug note.
fn scan_source(content: &str) -> SourceFacts {
    let mut facts = SourceFacts::default();
    let mut comment: Vec<String> = vec![];

    for line in content.lines() {
        if let Some(text) = comment_text(line) {
            // Directives like //go:generate are not documentation.
            if !text.starts_with("go:") {
                comment.push(text.to_string());
            }
            continue;
        }

        if facts.package_name.is_none()
            && let Some(rest) = line.strip_prefix("package ")
            && let Some(name) = rest.split_whitespace().next()
        {
            facts.package_name = Some(name.to_string());
            if !comment.is_empty() {
                facts.doc = comment.join("\n") + "\n";
            }
            comment.clear();
            continue;
        }

        harvest_bug(&comment, &mut facts.bugs);
        comment.clear();
    }
    harvest_bug(&comment, &mut facts.bugs);

    facts
}

fn comment_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("//")?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

fn harvest_bug(comment: &[String], bugs: &mut Vec<String>) {
    let Some(first) = comment.first() else {
        return;
    };
    let Some(caps) = BUG_NOTE.captures(first) else {
        return;
    };
    let mut body = caps[1].to_string();
    for line in &comment[1..] {
        body.push(' ');
        body.push_str(line.trim());
    }
    bugs.push(body.trim().to_string());
}

/// Pulls `func ExampleName()` bodies out of a test file. The body runs to
/// the closing brace at column zero and is dedented by one tab stop; a
/// trailing `// Output:` comment becomes the expected output.
fn scan_examples(content: &str) -> Vec<GoExample> {
    let mut examples = vec![];
    let mut current: Option<(String, Vec<String>)> = None;

    for line in content.lines() {
        match &mut current {
            None => {
                if let Some(rest) = line.strip_prefix("func Example")
                    && let Some(paren) = rest.find('(')
                    && rest[paren..].starts_with("()")
                    && rest.ends_with('{')
                {
                    current = Some((rest[..paren].to_string(), vec![]));
                }
            }
            Some((name, body)) => {
                if line == "}" {
                    examples.push(finish_example(name, body));
                    current = None;
                } else {
                    body.push(line.strip_prefix('\t').unwrap_or(line).to_string());
                }
            }
        }
    }

    examples
}

fn finish_example(name: &str, body: &[String]) -> GoExample {
    let marker = body.iter().position(|l| {
        l.trim()
            .to_ascii_lowercase()
            .starts_with("// output:")
    });

    let (code, output) = match marker {
        Some(i) => {
            let output: Vec<&str> = body[i + 1..]
                .iter()
                .filter_map(|l| comment_text(l.trim_start()))
                .collect();
            (&body[..i], output.join("\n"))
        }
        None => (body, String::new()),
    };

    GoExample {
        name: name.to_string(),
        code: code.join("\n").trim_end().to_string(),
        output,
    }
}

/// Derives the import path from the nearest enclosing `go.mod`.
fn import_path(dir: &Path) -> Result<String, PkgError> {
    let mut root = dir.to_path_buf();
    loop {
        let go_mod = root.join("go.mod");
        if go_mod.exists() {
            let module = module_path(&fs::read_to_string(&go_mod)?)
                .ok_or_else(|| PkgError::NoModule(dir.to_path_buf()))?;
            let rel = dir.strip_prefix(&root).unwrap_or(Path::new(""));
            return Ok(join_import(&module, rel));
        }
        if !root.pop() {
            return Err(PkgError::NoModule(dir.to_path_buf()));
        }
    }
}

fn module_path(go_mod: &str) -> Option<String> {
    go_mod.lines().find_map(|line| {
        line.strip_prefix("module")?
            .split_whitespace()
            .next()
            .map(str::to_string)
    })
}

fn join_import(module: &str, rel: &Path) -> String {
    let mut import = module.to_string();
    for part in rel.components() {
        import.push('/');
        import.push_str(&part.as_os_str().to_string_lossy());
    }
    import
}

/// `cmd/*` subdirectories holding `main` packages, as the original tool
/// lists them for the Install section.
fn cmd_subpackages(dir: &Path, import_path: &str) -> Vec<String> {
    let cmd_dir = dir.join("cmd");
    let Ok(entries) = fs::read_dir(&cmd_dir) else {
        return vec![];
    };

    let mut commands = vec![];
    for entry in entries.flatten() {
        let sub = entry.path();
        if !sub.is_dir() {
            continue;
        }
        let Ok((sources, _)) = go_files(&sub) else {
            continue;
        };
        let is_main = sources.iter().any(|p| {
            fs::read_to_string(p)
                .map(|c| scan_source(&c).package_name.as_deref() == Some("main"))
                .unwrap_or(false)
        });
        if is_main && let Some(name) = sub.file_name().and_then(|n| n.to_str()) {
            commands.push(format!("{import_path}/cmd/{name}"));
        }
    }
    commands.sort();
    commands
}

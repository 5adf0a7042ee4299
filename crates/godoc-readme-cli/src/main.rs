mod doc;
mod gopkg;
mod template;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use godoc_readme_config::Config;

use doc::PackageDoc;
use template::TemplateCache;

/// Generate a Markdown README from a Go package's godoc comments.
#[derive(Parser)]
#[command(name = "godoc-readme", version)]
struct Cli {
    /// Overwrite README.md if it already exists
    #[arg(short, long)]
    force: bool,

    /// Run in all subdirectories containing Go code
    #[arg(short, long)]
    recursive: bool,

    /// Write the built-in template to stdout and exit
    #[arg(long)]
    print_template: bool,

    /// Template file, overriding the built-in and .README.template.md
    #[arg(long)]
    template: Option<PathBuf>,

    /// Title of the README.md (defaults to the package name)
    #[arg(long)]
    title: Option<String>,

    /// Extra template define of the form name=value
    #[arg(long = "def", value_name = "NAME=VALUE", value_parser = parse_def)]
    defs: Vec<(String, String)>,

    /// Package directory
    #[arg(default_value = ".")]
    dir: PathBuf,
}

fn parse_def(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("define must have the form name=value, got {raw:?}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_template {
        print!("{}", template::BUILTIN_TEMPLATE);
        return Ok(());
    }

    let root = fs::canonicalize(&cli.dir)
        .with_context(|| format!("no such directory: {}", cli.dir.display()))?;
    let dirs = if cli.recursive {
        gopkg::go_dir_list(&root)?
    } else {
        vec![root]
    };

    let mut cache = TemplateCache::new()?;
    let mut warned = false;
    for dir in &dirs {
        if let Err(err) = generate(dir, &cli, &mut cache) {
            eprintln!("could not create README.md for {}: {err:#}", dir.display());
            warned = true;
        }
    }
    if warned {
        process::exit(1);
    }
    Ok(())
}

fn generate(dir: &Path, cli: &Cli, cache: &mut TemplateCache) -> Result<()> {
    let config = Config::load_from_dir(dir)?.unwrap_or_default();

    // Flags beat config, config beats defaults. The flag path is left as
    // given (cwd-relative); a config path resolves against the package
    // directory its config file lives in.
    let template_path = match (&cli.template, &config.template) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(path)) if path.is_relative() => Some(dir.join(path)),
        (None, Some(path)) => Some(path.clone()),
        (None, None) => None,
    };
    let title = cli.title.as_deref().or(config.title.as_deref());

    let mut defs: BTreeMap<String, String> = config.defs;
    defs.extend(cli.defs.iter().cloned());

    let pkg = gopkg::scan_package(dir)?;
    let doc = PackageDoc::new(&pkg, title);

    let name = cache.resolve(dir, template_path.as_deref())?;
    let rendered = cache.render(&name, &doc.context(&defs))?;

    write_readme(dir, &rendered, cli.force)
}

fn write_readme(dir: &Path, content: &str, force: bool) -> Result<()> {
    let path = dir.join("README.md");
    if !force && path.exists() {
        bail!(
            "README.md already exists at {} (use --force to overwrite)",
            dir.display()
        );
    }
    fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))
}

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use storefront_theme::provider::{render_stylesheet, style_tag, ThemeProvider};
use storefront_theme::store::{JsonDirThemeSource, StoreId};
use storefront_theme::{merge_theme, Theme};

const USAGE: &str = "usage: storefront-theme [--style-tag] [--store ID [--themes-dir DIR]] [THEME_JSON|-]";

#[derive(Debug, Default)]
struct Args {
    style_tag: bool,
    store: Option<String>,
    themes_dir: Option<PathBuf>,
    input: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut raw = std::env::args().skip(1);
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--style-tag" => args.style_tag = true,
            "--store" => args.store = Some(raw.next().context("--store needs a value")?),
            "--themes-dir" => {
                args.themes_dir = Some(raw.next().context("--themes-dir needs a value")?.into())
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
            _ if args.input.is_some() => bail!("only one theme file may be given\n{USAGE}"),
            path => args.input = Some(path.to_string()),
        }
    }
    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String> {
    match input {
        None | Some("-") => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read theme from stdin")?;
            Ok(buffer)
        }
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
        }
    }
}

fn main() -> Result<()> {
    let config = storefront_theme::startup()?;
    let args = parse_args()?;
    let options = config.css_options();

    let css = if let Some(store) = args.store.as_deref() {
        let store = StoreId::new(store)?;
        let dir = args
            .themes_dir
            .or_else(|| config.themes_dir.clone())
            .context("--store needs --themes-dir or themesDir in config.json")?;
        ThemeProvider::with_options(JsonDirThemeSource::new(dir), options).stylesheet_for(Some(&store))
    } else {
        let serialized = read_input(args.input.as_deref())?;
        let theme = if serialized.trim().is_empty() {
            None
        } else {
            Theme::from_json_str(&serialized).context("failed to parse theme JSON")?
        };
        render_stylesheet(&merge_theme(theme.as_ref()), &options)
    };

    if args.style_tag {
        println!("{}", style_tag(&css));
    } else {
        print!("{css}");
    }
    Ok(())
}

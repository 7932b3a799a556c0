use anyhow::{Context, Result};
use log::{info, warn};
use mdpost::{BlogPost, Command, Config, MarkdownRenderer, PostArgs};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let config = Config::parse();
    let _logger = mdpost::init_logging(config.verbose, config.log_dir.as_deref())
        .context("Failed to initialize logging")?;
    config.validate().context("Invalid configuration")?;

    match &config.command {
        Command::Render { input, output } => render(input, output.as_deref()),
        Command::Slug { text } => {
            println!("{}", mdpost::slugify(&text.join(" ")));
            Ok(())
        }
        Command::Parse {
            input,
            post,
            pretty,
        } => parse(input, post, *pretty),
        Command::Preview {
            input,
            output,
            post,
            no_open,
        } => preview(input, output, post, *no_open),
    }
}

/// Reads markdown from a file, or from standard input for `-`.
fn read_input(input: &Path) -> Result<String> {
    if mdpost::is_stdin(input) {
        let mut markdown = String::new();
        io::stdin()
            .read_to_string(&mut markdown)
            .context("Failed to read markdown from standard input")?;
        return Ok(markdown);
    }

    fs::read_to_string(input)
        .with_context(|| format!("Failed to read markdown file: {}", input.display()))
}

fn render(input: &Path, output: Option<&Path>) -> Result<()> {
    let markdown = read_input(input)?;
    let html = MarkdownRenderer::new().render(&markdown);

    match output {
        Some(path) => {
            write_file(path, &html)?;
            info!("wrote html path={} bytes={}", path.display(), html.len());
            println!("Generated: {}", path.display());
        }
        None => {
            writeln!(io::stdout().lock(), "{}", html)
                .context("Failed to write HTML to standard output")?;
        }
    }

    Ok(())
}

/// Builds a validated post record from markdown input and CLI fields.
fn build_post(input: &Path, args: &PostArgs) -> Result<BlogPost> {
    let markdown = read_input(input)?;
    let parsed = mdpost::parse_post(&markdown);
    if parsed.title == mdpost::UNTITLED {
        warn!("no level one header found, using fallback title");
    }

    let post = BlogPost::from_parsed(
        parsed,
        args.author.as_deref(),
        &args.category,
        mdpost::parse_tags(&args.tags),
    );
    post.validate()
        .with_context(|| format!("Post from {} is not publishable", input.display()))?;
    Ok(post)
}

fn parse(input: &Path, args: &PostArgs, pretty: bool) -> Result<()> {
    let post = build_post(input, args)?;
    let json = if pretty {
        serde_json::to_string_pretty(&post)
    } else {
        serde_json::to_string(&post)
    }
    .context("Failed to serialize post")?;

    println!("{}", json);
    Ok(())
}

fn preview(input: &Path, output: &Path, args: &PostArgs, no_open: bool) -> Result<()> {
    let post = build_post(input, args)?;

    fs::create_dir_all(output).context("Failed to create output directory")?;
    mdpost::write_css_assets(&output.join("assets"))?;

    let page_path: PathBuf = output.join(format!("{}.html", post.slug));
    write_file(&page_path, &mdpost::post_page(&post).into_string())?;
    info!("wrote preview path={}", page_path.display());
    println!("Generated: {}", page_path.display());

    if !no_open {
        open::that(&page_path)
            .with_context(|| format!("Failed to open preview: {}", page_path.display()))?;
    }

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

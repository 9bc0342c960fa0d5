use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use inlinemark::{Config, Markdown, Rendered, Settings, quotify};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Render comment Markdown to sanitized HTML")]
struct Cli {
    #[command(flatten)]
    opts: RenderOpts,
    /// Settings file (TOML)
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print the input as a reply quote for USER instead of rendering it
    #[arg(long = "quote", value_name = "USER", conflicts_with = "inline")]
    quote: Option<String>,
    /// Markdown files to render; standard input when omitted
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone, Copy)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "CLI exposes four independent flags"
)]
struct RenderOpts {
    /// Render a single inline run without paragraph wrapping
    #[arg(long = "inline")]
    inline: bool,
    /// Leave `rel="nofollow"` off links
    #[arg(long = "follow")]
    follow: bool,
    /// Treat emoji shortcodes as plain text
    #[arg(long = "no-emoji")]
    no_emoji: bool,
    /// List resolved mentions on standard error
    #[arg(long = "mentions")]
    mentions: bool,
    /// Resolve at most N mentions per input
    #[arg(long = "max-mentions", value_name = "N")]
    max_mentions: Option<usize>,
}

impl RenderOpts {
    fn apply(self, mut config: Config) -> Config {
        if self.follow {
            config = config.with_no_follow(false);
        }
        if self.no_emoji {
            config = config.without_emoji();
        }
        if self.max_mentions.is_some() {
            config = config.with_max_mentions(self.max_mentions);
        }
        config
    }
}

fn render_text(text: &str, config: &Config, opts: RenderOpts) -> anyhow::Result<Rendered> {
    let markdown = Markdown::new(config);
    let rendered = if opts.inline {
        markdown.render_inline(text)?
    } else {
        markdown.render(text)?
    };
    Ok(rendered)
}

fn report_mentions(rendered: &Rendered) {
    for (name, identity) in &rendered.mentions {
        eprintln!("@{name} <{}>", identity.profile_url);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

/// Entry point for the command-line renderer.
///
/// Reads Markdown from the named files, or from standard input when none are
/// given, and prints the HTML to standard output. Files are rendered in
/// parallel; output keeps argument order.
///
/// # Examples
///
/// ```sh
/// # Render a comment file
/// inlinemark comment.md
///
/// # Render standard input with a settings file
/// echo "hi @nitely :+1:" | inlinemark --config users.toml --mentions
/// ```
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let config = cli.opts.apply(settings.into_config());

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read standard input")?;
        if let Some(user) = &cli.quote {
            print!("{}", quotify(&input, user));
            return Ok(());
        }
        let rendered = render_text(&input, &config, cli.opts)?;
        println!("{}", rendered.html);
        if cli.opts.mentions {
            report_mentions(&rendered);
        }
        return Ok(());
    }

    let outputs: Vec<anyhow::Result<String>> = cli
        .files
        .par_iter()
        .map(|path| {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            if let Some(user) = &cli.quote {
                return Ok(quotify(&text, user));
            }
            let rendered = render_text(&text, &config, cli.opts)
                .with_context(|| format!("failed to render {}", path.display()))?;
            if cli.opts.mentions {
                report_mentions(&rendered);
            }
            Ok(rendered.html + "\n")
        })
        .collect();

    for output in outputs {
        print!("{}", output?);
    }

    Ok(())
}

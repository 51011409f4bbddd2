//! CLI binary for mdresume.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `RenderConfig` and reports what was written.

use anyhow::{Context, Result};
use clap::Parser;
use mdresume::{generate, RenderConfig};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Render resume.md to resume.html + resume.pdf
  mdresume

  # A different input file
  mdresume cv.md

  # HTML only (no Chrome needed)
  mdresume --no-pdf cv.md

  # Custom stylesheet and output name
  mdresume --css modern.css -o jane-doe cv.md

  # Browser in a non-standard location
  mdresume --chrome-path /opt/chromium/chrome cv.md

  # Show the exact Chrome command line
  mdresume -v cv.md

FILES:
  <input>.md       Markdown source; an optional leading --- frontmatter
                   block is stripped before rendering
  resume.css       Inlined into the page head (override with --css);
                   a missing stylesheet is a warning, not an error
  <prefix>.html    Standalone page, stylesheet inlined
  <prefix>.pdf     Headless-Chrome print of that page

PDF OUTPUT:
  PDF generation shells out to an installed Chrome or Chromium, probing
  well-known install locations per platform. No browser found means no
  PDF; install one or pass --chrome-path. The browser's exit status is
  ignored — the run succeeds exactly when the PDF file appears.
"#;

/// Render a Markdown résumé to styled HTML and a print-ready PDF.
#[derive(Parser, Debug)]
#[command(
    name = "mdresume",
    version,
    about = "Render a Markdown résumé to styled HTML and a print-ready PDF",
    long_about = "Render a Markdown résumé to a styled, standalone HTML page and a PDF \
printed by headless Chrome. The stylesheet is inlined, the PDF needs no network access, \
and the whole run is a single pass over one input file.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Markdown file to render.
    #[arg(default_value = "resume.md")]
    input: PathBuf,

    /// Skip writing the HTML file.
    #[arg(long, env = "MDRESUME_NO_HTML")]
    no_html: bool,

    /// Skip PDF generation (no browser required).
    #[arg(long, env = "MDRESUME_NO_PDF")]
    no_pdf: bool,

    /// Path to a Chrome or Chromium executable.
    #[arg(long, value_name = "PATH", env = "MDRESUME_CHROME_PATH")]
    chrome_path: Option<PathBuf>,

    /// Path to the CSS file to inline (default: resume.css).
    #[arg(long, value_name = "PATH", env = "MDRESUME_CSS")]
    css: Option<PathBuf>,

    /// Output filename without extension (default: input minus extension).
    #[arg(short, long, value_name = "PREFIX")]
    output: Option<String>,

    /// Suppress all output except errors.
    #[arg(short, long, env = "MDRESUME_QUIET")]
    quiet: bool,

    /// Enable DEBUG-level logs, including the Chrome command line.
    #[arg(short, long, env = "MDRESUME_VERBOSE")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let mut builder = RenderConfig::builder()
        .write_html(!cli.no_html)
        .write_pdf(!cli.no_pdf);

    if let Some(css) = cli.css {
        builder = builder.css_path(css);
    }
    if let Some(chrome) = cli.chrome_path {
        builder = builder.chrome_path(chrome);
    }
    if let Some(output) = cli.output {
        builder = builder.output_prefix(output);
    }
    let config = builder.build();

    // ── Run the pipeline ─────────────────────────────────────────────────
    generate(&cli.input, &config)
        .await
        .with_context(|| format!("Failed to render {}", cli.input.display()))?;

    Ok(())
}

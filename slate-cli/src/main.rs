//! Slate CLI
//!
//! Tokenizes and parses a template and prints the result.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use slate_markup::{ParseOptions, Template, Token, TokenKind, WhitespaceMode, print_tree};

/// Slate: inspect how a markup template tokenizes and parses
#[derive(Parser, Debug)]
#[command(name = "slate")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the tree for a template file
    slate ./card.html

    # Parse inline source; ${...} marks a slot
    slate --source '<div class="btn ${active}">${label}</div>'

    # Show the token stream
    slate --tokens --source '<input value=${v} />'

    # HTML void and raw-text elements, strict closing tags
    slate --html --strict ./page.html

    # Read stdin and dump JSON
    cat card.html | slate --json -
"#)]
struct Cli {
    /// Template file, or `-` for stdin
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Parse this template string instead of a file
    #[arg(long, value_name = "TEMPLATE", conflicts_with = "path")]
    source: Option<String>,

    /// Print the token stream instead of the tree
    #[arg(short, long)]
    tokens: bool,

    /// Print JSON instead of the human-readable form
    #[arg(short, long)]
    json: bool,

    /// Reject closing tags that do not match their opening tag
    #[arg(long)]
    strict: bool,

    /// Whitespace-only text policy: trim or preserve
    #[arg(long, value_name = "MODE", default_value_t = WhitespaceMode::Trim)]
    whitespace: WhitespaceMode,

    /// Use the HTML void and raw-text element tables
    #[arg(long)]
    html: bool,

    /// Extra void element name (repeatable)
    #[arg(long = "void", value_name = "NAME")]
    void_elements: Vec<String>,

    /// Extra raw-text element name (repeatable)
    #[arg(long = "raw-text", value_name = "NAME")]
    raw_text_elements: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (label, source) = read_source(&cli)?;
    let template = Template::from_source(&source);
    let options = parse_options(&cli);

    if cli.tokens {
        let tokens = slate_markup::tokenize_with_options(
            template.segments(),
            template.slot_count(),
            &options,
        );
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        } else {
            print_tokens(&tokens);
        }
        return Ok(());
    }

    let root = template
        .parse_with_options(&options)
        .with_context(|| format!("failed to parse {label}"))?;

    if cli.json {
        println!("{}", root.to_json_pretty()?);
    } else {
        println!(
            "=== {label}: {} segments, {} slots ===",
            template.segments().len(),
            template.slot_count()
        );
        print_tree(&root);
    }
    Ok(())
}

/// Returns a display label for the input and its contents.
fn read_source(cli: &Cli) -> Result<(String, String)> {
    if let Some(ref source) = cli.source {
        return Ok(("<source>".to_string(), source.clone()));
    }
    match cli.path {
        Some(ref path) if path.as_os_str() == "-" => {
            let source = io::read_to_string(io::stdin()).context("failed to read stdin")?;
            Ok(("<stdin>".to_string(), source))
        }
        Some(ref path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((path.display().to_string(), source))
        }
        None => bail!("a template FILE, `-` for stdin, or --source is required"),
    }
}

fn parse_options(cli: &Cli) -> ParseOptions {
    let base = if cli.html {
        ParseOptions::html()
    } else {
        ParseOptions::new()
    };
    base.with_void_elements(&cli.void_elements)
        .with_raw_text_elements(&cli.raw_text_elements)
        .with_strict_closing_tags(cli.strict)
        .with_whitespace(cli.whitespace)
}

fn print_tokens(tokens: &[Token]) {
    println!("=== Tokens ===");
    for (index, token) in tokens.iter().enumerate() {
        let line = token.to_string();
        let line = match token.kind() {
            TokenKind::Text => line.green().to_string(),
            TokenKind::Identifier => line.cyan().to_string(),
            TokenKind::QuoteMark | TokenKind::AttributeValue => line.yellow().to_string(),
            TokenKind::ExpressionSlot | TokenKind::AttributeExpressionSlot => {
                line.magenta().bold().to_string()
            }
            TokenKind::OpenTagMark
            | TokenKind::CloseTagMark
            | TokenKind::Slash
            | TokenKind::Equals => line.dimmed().to_string(),
        };
        println!("{index:>4}  {line}");
    }
}

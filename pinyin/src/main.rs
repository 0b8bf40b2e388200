// pinyin/src/main.rs
//
// Command-line front end: converts its arguments, or stdin line by line.
//
//   hanzi-pinyin --style tone 中国人        -> zhōng guó rén
//   hanzi-pinyin --slug 银行行长            -> yin-hang-hang-zhang
//   echo 中国人 | hanzi-pinyin --array      -> ["zhong","guo","ren"]

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use hanzi_pinyin::{Config, Converter, Options, Style};

#[derive(Parser, Debug)]
#[command(name = "hanzi-pinyin", version, about = "Convert Chinese text to pinyin")]
struct Args {
    /// Text to convert. Reads stdin line by line when omitted.
    text: Vec<String>,

    /// Output style: plain, tone, tone-num, tone-num-end, letter
    #[arg(long)]
    style: Option<Style>,

    /// Field separator (one ASCII character)
    #[arg(long)]
    separator: Option<String>,

    /// Render every reading of a polyphone
    #[arg(long)]
    multi: bool,

    /// Keep non-Han text and unknown characters instead of dropping them
    #[arg(long)]
    keep_unknown: bool,

    /// Pass unknown Han characters through (implies --keep-unknown)
    #[arg(long)]
    keep_unknown_han: bool,

    /// Join adjacent pass-through text without separators
    #[arg(long)]
    join_unknown: bool,

    /// Print a JSON array instead of a joined string
    #[arg(long)]
    array: bool,

    /// Print a URL slug (plain, unknown text dropped, '-' by default)
    #[arg(long)]
    slug: bool,

    /// TOML options file; command-line flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// TOML dictionary config (tables, embedded on/off, max word length)
    #[arg(long)]
    dict_config: Option<PathBuf>,

    /// Extra reading table, loaded after the embedded ones
    #[arg(long = "table")]
    tables: Vec<PathBuf>,

    /// Do not load the embedded reading tables
    #[arg(long)]
    no_embedded: bool,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn build_options(args: &Args) -> Result<Options> {
    let mut options = match &args.config {
        Some(path) => Options::load_toml(path)
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => Options::default(),
    };

    if let Some(style) = args.style {
        options.style = style;
    }
    if let Some(raw) = &args.separator {
        options.separator = Options::parse_separator(raw).context("--separator")?;
    }
    if args.multi {
        options.multi_pronunciation = true;
    }
    if args.keep_unknown || args.keep_unknown_han {
        options.skip_unknown = false;
    }
    if args.keep_unknown_han {
        options.keep_unknown_han = true;
    }
    if args.join_unknown {
        options.keep_unknown_joined = true;
    }
    if args.slug {
        let separator = match &args.separator {
            Some(raw) => Options::parse_separator(raw).context("--separator")?,
            None => '-',
        };
        options = Options::slug(separator);
    }
    options.validate().context("invalid options")?;
    Ok(options)
}

fn build_converter(args: &Args) -> Result<Converter> {
    let mut config = match &args.dict_config {
        Some(path) => Config::load_toml(path)
            .with_context(|| format!("loading dictionary config from {}", path.display()))?,
        None => Config::default(),
    };
    config.tables.extend(args.tables.iter().cloned());
    if args.no_embedded {
        config.embedded_tables = false;
    }
    if !config.embedded_tables && config.tables.is_empty() {
        bail!("embedded tables are disabled and no --table was given");
    }
    Converter::from_config(&config).context("loading reading tables")
}

fn emit(
    out: &mut impl Write,
    conv: &Converter,
    text: &str,
    options: &Options,
    array: bool,
) -> Result<()> {
    if array {
        let fields = conv.convert_array(text, options)?;
        writeln!(out, "{}", serde_json::to_string(&fields)?)?;
    } else {
        writeln!(out, "{}", conv.convert(text, options)?)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let options = build_options(&args)?;
    let conv = build_converter(&args)?;
    tracing::debug!(entries = conv.dictionary().len(), style = %options.style, "converter ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let array = args.array && !args.slug;

    if !args.text.is_empty() {
        let text = args.text.join(" ");
        emit(&mut out, &conv, &text, &options, array)?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        emit(&mut out, &conv, &line, &options, array)?;
    }
    Ok(())
}

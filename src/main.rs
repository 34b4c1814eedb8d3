//! CLI entry point for `tracemail`.

use std::path::PathBuf;

use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand};

use tracemail::config::Config;
use tracemail::i18n;
use tracemail::model::message::Sections;
use tracemail::report;

#[derive(Parser)]
#[command(name = "tracemail", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Language (en, es). Defaults to system locale.
    #[arg(long, global = true, value_name = "LANG")]
    lang: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one or more messages
    Analyze {
        /// Text file(s) containing an e-mail header to analyze
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        sections: SectionArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate a man page
    Manpage,
}

#[derive(Args)]
struct SectionArgs {
    /// Display everything
    #[arg(short, long)]
    all: bool,

    /// Print delay in seconds between hops
    #[arg(short, long)]
    delay: bool,

    /// Display message ID
    #[arg(short, long, alias = "message_id")]
    message_id: bool,

    /// Display originating IP address
    #[arg(short, long)]
    origin: bool,

    /// Display route information
    #[arg(short, long)]
    route: bool,

    /// Display user agent
    #[arg(short, long, alias = "user_agent")]
    user_agent: bool,
}

impl SectionArgs {
    fn sections(&self) -> Sections {
        if self.all {
            return Sections::all();
        }
        Sections {
            origin: self.origin,
            user_agent: self.user_agent,
            message_id: self.message_id,
            route: self.route,
            delay: self.delay,
        }
    }
}

/// Detect language early from --lang arg or system env, before clap processes --help.
fn detect_lang_early() -> i18n::Lang {
    let args: Vec<String> = std::env::args().collect();
    for (i, arg) in args.iter().enumerate() {
        let code = if arg == "--lang" {
            args.get(i + 1).map(String::as_str)
        } else {
            arg.strip_prefix("--lang=")
        };
        if let Some(lang) = code.and_then(i18n::Lang::from_code) {
            return lang;
        }
    }
    i18n::detect_system_lang()
}

/// Build a localized clap Command using i18n strings.
fn build_localized_command() -> clap::Command {
    let mut cmd = Cli::command()
        .about(i18n::app_about())
        .long_about(i18n::app_long_about())
        .after_help(i18n::app_after_help());

    for (name, about) in [
        ("analyze", i18n::help_cmd_analyze()),
        ("completions", i18n::help_cmd_completions()),
        ("manpage", i18n::help_cmd_manpage()),
    ] {
        cmd = cmd.mut_subcommand(name, |sub| sub.about(about));
    }

    cmd
}

fn main() -> anyhow::Result<()> {
    let lang = detect_lang_early();
    i18n::set_lang(lang);

    let matches = build_localized_command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    let config = tracemail::config::load_config();

    let log_level = match cli.verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    setup_logging(log_level, &config);
    tracing::debug!(lang = lang.code(), "Language selected");

    match cli.command {
        Commands::Analyze {
            files,
            sections,
            json,
        } => cmd_analyze(&files, sections.sections(), json, &config),
        Commands::Completions { shell } => cmd_completions(shell),
        Commands::Manpage => cmd_manpage(),
    }
}

/// Set up tracing with stderr output and optional file logging.
fn setup_logging(level: &str, config: &Config) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let log_dir = tracemail::config::cache_dir(config);
    if std::fs::create_dir_all(&log_dir).is_ok() {
        let file_appender = tracing_appender::rolling::never(&log_dir, "tracemail.log");
        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
    }
}

/// Analyze each file in turn. A missing or non-regular file stops the run.
fn cmd_analyze(
    files: &[PathBuf],
    sections: Sections,
    json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    for path in files {
        let analysis = tracemail::trace::analyze_file(path, sections)?;

        if json {
            println!("{}", report::json::to_json(&analysis)?);
        } else {
            print!(
                "{}",
                report::text::render_report(&analysis, sections, &config.report)
            );
            println!("{}", config.report.divider());
        }
    }
    Ok(())
}

/// Generate shell completions and print to stdout.
fn cmd_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "tracemail", &mut std::io::stdout());
    Ok(())
}

/// Generate a man page and print to stdout.
fn cmd_manpage() -> anyhow::Result<()> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buf = Vec::new();
    man.render(&mut buf)?;
    std::io::Write::write_all(&mut std::io::stdout(), &buf)?;
    Ok(())
}

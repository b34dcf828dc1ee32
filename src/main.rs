use clap::{Parser as ClapParser, Subcommand};
use databreaks::cli::{self, CheckOptions, CliError, ConvertOptions};
use databreaks::{Lang, TraceSink, TracingSink};
use std::io::{self, Read};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "databreaks")]
#[command(about = "Decompose SELECT field-composite queries into a language-independent model and back")]
#[command(version)]
struct Cli {
    /// Log every decomposition step (debug level unless RUST_LOG says otherwise)
    #[arg(long, global = true)]
    trace: bool,

    /// Query language of the input and output text
    #[arg(long, global = true, default_value = "influxql")]
    lang: Lang,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decompose a query and print its model as JSON
    Decompose {
        /// The query to decompose
        query: String,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Render a JSON model back into query text
    Compose {
        /// JSON model (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Decompose a query, render it back and report both
    Check {
        /// The query to check (defaults to a sample query)
        query: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Show the accepted grammar, or one topic of it
    Grammar {
        /// Topic name (use 'databreaks grammar' to list topics)
        topic: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    let trace: Option<Arc<dyn TraceSink>> = if cli.trace {
        Some(Arc::new(TracingSink))
    } else {
        None
    };

    let result = match cli.command {
        Commands::Decompose { query, pretty } => {
            let options = ConvertOptions { pretty, trace };
            cli::decompose_to_json(&query, &options).map(|json| println!("{}", json))
        }
        Commands::Compose { input } => run_compose(input),
        Commands::Check { query, pretty } => run_check(query, cli.lang, trace, pretty),
        Commands::Grammar { topic: None } => {
            print!("{}", cli::get_grammar_overview());
            Ok(())
        }
        Commands::Grammar { topic: Some(topic) } => {
            cli::get_grammar_topic(&topic).map(|content| print!("{}", content))
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_tracing(trace: bool) {
    let default = if trace { "databreaks=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_compose(input: Option<String>) -> Result<(), CliError> {
    let input = match input {
        Some(s) => s,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        None => return Err(CliError::NoInput),
    };

    println!("{}", cli::compose_from_json(&input)?);
    Ok(())
}

fn run_check(
    query: Option<String>,
    lang: Lang,
    trace: Option<Arc<dyn TraceSink>>,
    pretty: bool,
) -> Result<(), CliError> {
    let options = CheckOptions {
        query: query.unwrap_or_else(|| cli::DEFAULT_QUERY.to_string()),
        lang,
        trace,
    };

    let report = cli::execute_check(&options);
    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);
    Ok(())
}

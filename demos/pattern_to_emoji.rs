//! Compiles a drum pattern and prints it as an emoji message.
//!
//! ```text
//! cargo run --example pattern_to_emoji -- "(kkkdddk)kdd(kkkd)d[kkd]d k"
//! ```
//!
//! Malformed patterns are reported with diagnostics pointing at the offending symbols.

use std::path::PathBuf;

use clap::Parser;
use taiko_pattern::pattern::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pattern_to_emoji")]
#[command(about = "Compiles a taiko drum pattern into note-cell emojis", long_about = None)]
struct Config {
    /// The pattern, such as `(kkkd)d[kkd]d k`
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// Compile `()` and `[]` into a rest instead of rejecting them
    #[arg(long)]
    empty_as_rest: bool,

    /// Maximum number of cells
    #[arg(long, value_name = "COUNT")]
    max_tokens: Option<usize>,

    /// Maximum length of the message in characters
    #[arg(long, default_value_t = DISCORD_MESSAGE_LIMIT, value_name = "CHARS")]
    message_limit: usize,

    /// Print the asset path of every cell in this folder instead of the message
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Config::parse();
    let mut config = default_config();
    if args.empty_as_rest {
        config = config.empty_group(EmptyGroupWorkaround::Rest);
    }
    if let Some(limit) = args.max_tokens {
        config = config.max_tokens(limit);
    }

    let tokens = match compile_with_config(&args.pattern, &config) {
        Ok(tokens) => tokens,
        Err(err) => {
            emit_pattern_errors("pattern", &args.pattern, [&err]);
            std::process::exit(1);
        }
    };

    if let Some(dir) = &args.assets {
        for token in &tokens {
            println!("{}\t{}", token, token.asset_path(dir).display());
        }
        return;
    }

    match render_message(&tokens, &NoEmojis, args.message_limit) {
        Ok(message) => println!("{message}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

use std::fs;
use std::io::{IsTerminal, Read};

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cohort::engine::generate_with_rng;
use cohort::input::{parse_items, parse_pairs};
use cohort::pack::PackConfig;
use cohort::report::{render_text, ExportRecord};

/// cohort - split named items into equal-size groups while keeping chosen
/// pairs together
///
/// Items come from a file or stdin, one name per line (commas also
/// separate). Pairs listed with -p must end up in the same group.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Items file, one name per line (stdin if not specified)
    #[clap(value_name = "ITEMS")]
    items: Option<String>,

    /// Pairs file, one "A,B" must-be-together constraint per line
    #[clap(short = 'p', long = "pairs")]
    pairs: Option<String>,

    /// Number of groups
    #[clap(short = 'k', long = "groups", default_value = "2")]
    groups: usize,

    /// Allow group sizes to differ by one when items don't divide evenly
    #[clap(long = "near")]
    near: bool,

    /// Distinct groupings to produce
    #[clap(short = 'c', long = "count", default_value = "1")]
    count: usize,

    /// Attempt budget for the randomized search
    #[clap(long = "attempts", default_value = "1200")]
    attempts: usize,

    /// Seed the random source for reproducible groupings
    #[clap(long = "seed")]
    seed: Option<u64>,

    /// Emit a JSON export record instead of text
    #[clap(long = "json")]
    json: bool,

    /// Output file (stdout if not specified)
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Quiet mode (no progress output)
    #[clap(long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let items_text = match args.items {
        Some(ref path) => {
            fs::read_to_string(path).with_context(|| format!("reading items file {path}"))?
        }
        None => {
            if std::io::stdin().is_terminal() {
                use clap::CommandFactory;
                Args::command().print_help()?;
                std::process::exit(0);
            }
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading items from stdin")?;
            buf
        }
    };
    let items = parse_items(&items_text);

    let pairs = match args.pairs {
        Some(ref path) => {
            let text =
                fs::read_to_string(path).with_context(|| format!("reading pairs file {path}"))?;
            parse_pairs(&text).with_context(|| format!("parsing pairs file {path}"))?
        }
        None => Vec::new(),
    };

    if !args.quiet {
        eprintln!(
            "{} item(s), {} pair(s), {} group(s)",
            items.len(),
            pairs.len(),
            args.groups
        );
    }

    let config = PackConfig {
        max_solutions: args.count.max(1),
        max_attempts: args.attempts,
    };
    let groupings = match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_with_rng(&items, &pairs, args.groups, args.near, &config, &mut rng)?
        }
        None => generate_with_rng(
            &items,
            &pairs,
            args.groups,
            args.near,
            &config,
            &mut rand::thread_rng(),
        )?,
    };

    if !args.quiet && groupings.len() < config.max_solutions {
        eprintln!(
            "found {} of {} requested grouping(s)",
            groupings.len(),
            config.max_solutions
        );
    }

    let rendered = if args.json {
        let record = ExportRecord::new(&items, &pairs, args.groups, args.near, &groupings);
        let mut json = record.to_json()?;
        json.push('\n');
        json
    } else {
        render_text(&groupings)
    };

    match args.output {
        Some(ref path) => {
            fs::write(path, rendered).with_context(|| format!("writing {path}"))?
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

use clap::{Args, Parser, Subcommand};
use signal_hook::{consts::{SIGINT, SIGTERM}, iterator::Signals};
use std::{
    error::Error,
    fs::File,
    io::{self, BufReader, Write},
    path::PathBuf,
    sync::atomic::Ordering,
    thread,
    time::Instant,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use mdst::{
    generator::Generator,
    graph::Graph,
    io::{read_graph, write_graph},
    mdst::{find_mdst, ABORT},
    oracle::find_exact_mdst,
    validate::{default_groups, run_group},
};

/// Spanning trees of small maximum degree.
#[derive(Parser)]
#[command(name = "mdst", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read a graph and print a spanning tree of (almost) minimum maximum degree.
    Solve(SolveArgs),
    /// Print a random connected instance, or a disjoint union of several.
    Generate(GenerateArgs),
    /// Compare the solver with the exact solver on generated instance groups.
    Validate(ValidateArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// Input file, stdin if omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Use the exact brute-force solver (at most 28 edges).
    #[arg(long)]
    exact: bool,

    /// Append the maximum degree to the header line.
    #[arg(long)]
    stats: bool,
}

#[derive(Args)]
struct GenerateArgs {
    #[arg(short = 'n', long)]
    vertices: usize,

    #[arg(short = 'm', long)]
    edges: usize,

    /// Seed of the random generator, random if omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of disjoint components.
    #[arg(short, long, default_value_t = 1)]
    components: usize,

    /// Two instances joined by a single bridge edge.
    #[arg(short, long, conflicts_with = "components")]
    bridged: bool,
}

#[derive(Args)]
struct ValidateArgs {
    /// Seed of the instance groups, random if omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Instances per parameter pair, overrides the group defaults.
    #[arg(short, long)]
    regen: Option<usize>,
}

fn read_input(input: &Option<PathBuf>) -> Result<Graph, Box<dyn Error>> {
    let g = match input {
        Some(path) => read_graph(BufReader::new(File::open(path)?))?,
        None       => read_graph(io::stdin().lock())?,
    };
    Ok(g)
}

fn solve(args: SolveArgs) -> Result<(), Box<dyn Error>> {
    let now = Instant::now();
    let g = read_input(&args.input)?;
    info!(n = g.number_of_vertices(), m = g.number_of_edges(), "read graph");

    let mut signals = Signals::new(&[SIGINT, SIGTERM])?;
    thread::spawn(move || {
        for sig in signals.forever() {
            ABORT.store(true, Ordering::Relaxed);
            warn!(sig, "received signal");
        }
    });

    let tree = if args.exact { find_exact_mdst(&g)? } else { find_mdst(&g)? };
    info!(elapsed_ms = now.elapsed().as_millis() as u64, max_degree = tree.max_degree(), "done");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_graph(&mut out, &tree, args.stats)?;
    out.flush()?;
    Ok(())
}

fn generate(args: GenerateArgs) -> Result<(), Box<dyn Error>> {
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "generating");
    let mut generator = Generator::new(args.vertices, args.edges, seed);
    let g = if args.bridged {
        generator.generate_bridged()
    } else if args.components > 1 {
        generator.generate_components(args.components)
    } else {
        generator.generate()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_graph(&mut out, &g, false)?;
    out.flush()?;
    Ok(())
}

fn validate(args: ValidateArgs) -> Result<(), Box<dyn Error>> {
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "validating");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0;
    for mut group in default_groups() {
        if let Some(regen) = args.regen {
            group.regen_factor = regen;
        }
        let report = run_group(&group, seed)?;
        writeln!(out, "{}: {} / {} optimal, {} one above, accuracy {:.3}",
                 report.name, report.optimal, report.total, report.near_optimal, report.accuracy())?;
        for (g, cause) in report.failures.iter() {
            writeln!(out, "FAILED ({}):", cause)?;
            write_graph(&mut out, g, false)?;
        }
        failed += report.failures.len();
    }
    out.flush()?;
    if failed > 0 {
        return Err(format!("{} instances failed (seed {})", failed, seed).into());
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Solve(args)    => solve(args),
        Command::Generate(args) => generate(args),
        Command::Validate(args) => validate(args),
    };
    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

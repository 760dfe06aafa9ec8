//! Binary entry point for the trama graph engine CLI.
#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use trama::{GraphSession, Result, VertexId};

#[derive(Parser, Debug)]
#[command(
    name = "trama",
    version,
    about = "Degree, reachability, and connectivity queries over edge-list files",
    disable_help_subcommand = true
)]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Treat the edge list as directed (default mirrors every edge)"
    )]
    directed: bool,

    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Output format for query responses"
    )]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show vertex and arc counts
    Info {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Show min/max/average degree statistics
    Stats {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Show the vertices with maximal out- and in-degree
    Critical {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Breadth-first traversal bounded by depth
    Bfs {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(value_name = "START")]
        start: VertexId,

        #[arg(value_name = "DEPTH", default_value_t = 1)]
        max_depth: u32,
    },
    /// Count connected components (forward reachability on directed loads)
    Components {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut session = GraphSession::new();
    match cli.command {
        Command::Info { file } => {
            session.load(&file, cli.directed)?;
            let (vertices, arcs) = session.get_sizes();
            match cli.format {
                OutputFormat::Text => {
                    println!("vertices: {vertices}");
                    println!("arcs: {arcs}");
                }
                OutputFormat::Json => {
                    println!("{}", json!({ "vertices": vertices, "arcs": arcs }));
                }
            }
        }
        Command::Stats { file } => {
            session.load(&file, cli.directed)?;
            let stats = session.degree_statistics()?;
            match cli.format {
                OutputFormat::Text => {
                    println!(
                        "out-degree: min {} max {} avg {:.3}",
                        stats.min_out, stats.max_out, stats.avg_out
                    );
                    println!(
                        "in-degree:  min {} max {} avg {:.3}",
                        stats.min_in, stats.max_in, stats.avg_in
                    );
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string(&stats)?);
                }
            }
        }
        Command::Critical { file } => {
            session.load(&file, cli.directed)?;
            let out = session.max_out_degree_vertex()?;
            let inn = session.max_in_degree_vertex()?;
            match cli.format {
                OutputFormat::Text => {
                    println!("max out-degree vertex: {out}");
                    println!("max in-degree vertex: {inn}");
                }
                OutputFormat::Json => {
                    println!("{}", json!({ "max_out_degree": out, "max_in_degree": inn }));
                }
            }
        }
        Command::Bfs {
            file,
            start,
            max_depth,
        } => {
            session.load(&file, cli.directed)?;
            let res = session.bfs(start, max_depth)?;
            match cli.format {
                OutputFormat::Text => {
                    println!("visited ({}): {:?}", res.visited.len(), res.visited);
                    println!(
                        "frontier edges ({}): {:?}",
                        res.frontier_edges.len(),
                        res.frontier_edges
                    );
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string(&res)?);
                }
            }
        }
        Command::Components { file } => {
            session.load(&file, cli.directed)?;
            let components = session.count_components();
            match cli.format {
                OutputFormat::Text => println!("components: {components}"),
                OutputFormat::Json => println!("{}", json!({ "components": components })),
            }
        }
    }
    Ok(())
}

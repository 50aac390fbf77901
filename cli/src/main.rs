//! bibnet CLI: build bibliometric networks from a document export
//!
//! Reads a JSON array of document records and writes an interactive HTML
//! page for the requested network kind.

use anyhow::Context;
use bibnet::doc::DocumentSet;
use bibnet::network::{
    build_citation_network, build_coauthor_network, build_cocitation_network,
    build_coupling_network, BuildOptions, ColorSpec,
};
use bibnet::render::{render_network, Algorithm, RenderOptions, RenderSummary, DEFAULT_OUTPUT};
use bibnet::Network;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bibnet", version, about = "Bibliometric network builder")]
struct Cli {
    /// Input document set (JSON array of records)
    #[arg(long, short, global = true, default_value = "documents.json")]
    input: PathBuf,

    /// Output HTML file
    #[arg(long, short, global = true, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Layout algorithm
    #[arg(long, global = true, default_value = "forceatlas2")]
    layout: LayoutChoice,

    /// Layout iterations
    #[arg(long, global = true, default_value_t = 1000)]
    iterations: usize,

    /// Layout random seed
    #[arg(long, global = true, default_value_t = 42)]
    seed: u64,

    /// Keep every connected component instead of only the largest
    #[arg(long, global = true)]
    all_components: bool,

    /// Disable the physics simulation in the generated page
    #[arg(long, global = true)]
    frozen: bool,

    /// Show the vis-network configuration panel in the page
    #[arg(long, global = true)]
    controls: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum LayoutChoice {
    #[value(name = "forceatlas2")]
    ForceAtlas2,
    Spring,
}

#[derive(Subcommand)]
enum Commands {
    /// Directed network of documents citing documents
    Citation {
        /// Color nodes by this document attribute
        #[arg(long)]
        color_by: Option<String>,
    },
    /// Weighted network of documents cited together
    Cocitation {
        /// Color nodes by this document attribute
        #[arg(long)]
        color_by: Option<String>,

        /// Keep only the strongest edges
        #[arg(long)]
        max_edges: Option<usize>,
    },
    /// Weighted network of documents sharing references
    Coupling {
        /// Color nodes by this document attribute
        #[arg(long)]
        color_by: Option<String>,

        /// Keep only the strongest edges
        #[arg(long)]
        max_edges: Option<usize>,
    },
    /// Weighted network of authors writing together
    Coauthor {
        /// Keep only the most published authors
        #[arg(long)]
        max_authors: Option<usize>,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let docs = DocumentSet::from_json_file(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    println!("Loaded {} documents from {}", docs.len(), cli.input.display());

    let network = match &cli.command {
        Commands::Citation { color_by } => {
            build_citation_network(&docs, &build_options(color_by))?
        }
        Commands::Cocitation { color_by, max_edges } => {
            build_cocitation_network(&docs, *max_edges, &build_options(color_by))?
        }
        Commands::Coupling { color_by, max_edges } => {
            build_coupling_network(&docs, *max_edges, &build_options(color_by))?
        }
        Commands::Coauthor { max_authors } => build_coauthor_network(&docs, *max_authors),
    };

    let summary = render_network(&network, &render_options(cli), &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    print_summary(&network, summary);
    print_top_edges(&network, 10);
    println!("Wrote {}", cli.output.display());
    Ok(())
}

fn build_options(color_by: &Option<String>) -> BuildOptions {
    BuildOptions {
        colors: color_by.as_deref().map(ColorSpec::from),
        ..Default::default()
    }
}

fn render_options(cli: &Cli) -> RenderOptions {
    let mut options = RenderOptions::default();
    options.largest_component = !cli.all_components;
    options.interactive = !cli.frozen;
    options.controls = cli.controls;
    options.layout.iterations = cli.iterations;
    options.layout.seed = cli.seed;
    options.layout.algorithm = match cli.layout {
        LayoutChoice::ForceAtlas2 => Algorithm::ForceAtlas2,
        LayoutChoice::Spring => Algorithm::Spring,
    };
    options
}

fn print_summary(network: &Network, summary: RenderSummary) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", "built", "rendered"]);
    table.add_row(vec![
        "nodes".to_string(),
        network.node_count().to_string(),
        summary.nodes.to_string(),
    ]);
    table.add_row(vec![
        "edges".to_string(),
        network.edge_count().to_string(),
        summary.edges.to_string(),
    ]);
    println!("{}", table);
}

fn print_top_edges(network: &Network, limit: usize) {
    let mut weighted: Vec<(u64, usize, usize)> = network
        .edges
        .iter()
        .filter_map(|e| e.weight.map(|w| (w, e.source, e.target)))
        .collect();
    if weighted.is_empty() {
        return;
    }
    weighted.sort_unstable_by(|a, b| b.0.cmp(&a.0).then_with(|| (a.1, a.2).cmp(&(b.1, b.2))));
    weighted.truncate(limit);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["weight", "source", "target"]);
    for (weight, source, target) in weighted {
        table.add_row(vec![
            weight.to_string(),
            network.nodes[source].title.clone(),
            network.nodes[target].title.clone(),
        ]);
    }
    println!("{}", table);
}

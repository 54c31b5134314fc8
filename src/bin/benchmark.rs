use std::env;
use std::time::{Duration, Instant};

use log::info;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use shortest_path::graph::generators::generate_random;
use shortest_path::graph::{DirectedGraph, GraphProvider};
use shortest_path::{Dijkstra, ShortestPathAlgorithm};

/// Settings for a benchmark run
#[derive(Debug, Clone)]
struct BenchmarkConfig {
    nodes: usize,
    edge_factor: f64,
    queries: usize,
    seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            nodes: 100_000,
            edge_factor: 4.0,
            queries: 200,
            seed: 42,
        }
    }
}

impl BenchmarkConfig {
    /// Reads `[nodes] [edge_factor] [queries] [seed]`, falling back to defaults
    fn from_args(args: &[String]) -> Self {
        let defaults = BenchmarkConfig::default();
        BenchmarkConfig {
            nodes: args.get(1).and_then(|a| a.parse().ok()).unwrap_or(defaults.nodes),
            edge_factor: args
                .get(2)
                .and_then(|a| a.parse().ok())
                .unwrap_or(defaults.edge_factor),
            queries: args.get(3).and_then(|a| a.parse().ok()).unwrap_or(defaults.queries),
            seed: args.get(4).and_then(|a| a.parse().ok()).unwrap_or(defaults.seed),
        }
    }
}

type Graph = DirectedGraph<usize, OrderedFloat<f64>>;

/// Runs every query one after the other; returns elapsed time and the number of answered queries
fn run_sequential(graph: &Graph, queries: &[(usize, usize)]) -> (Duration, usize) {
    let dijkstra = Dijkstra::new();
    let start = Instant::now();
    let found = queries
        .iter()
        .filter(|(s, t)| dijkstra.shortest_path(graph, s, t).is_ok())
        .count();
    (start.elapsed(), found)
}

/// Runs the queries on the rayon pool against the shared graph
fn run_parallel(graph: &Graph, queries: &[(usize, usize)]) -> (Duration, usize) {
    let dijkstra = Dijkstra::new();
    let start = Instant::now();
    let found = queries
        .par_iter()
        .filter(|(s, t)| dijkstra.shortest_path(graph, s, t).is_ok())
        .count();
    (start.elapsed(), found)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = BenchmarkConfig::from_args(&args);
    if config.nodes == 0 {
        eprintln!("node count must be positive");
        std::process::exit(2);
    }

    println!("=====================================================");
    println!("Benchmark: point-to-point Dijkstra");
    println!(
        "Nodes: {}, edge factor: {}, queries: {}, seed: {}",
        config.nodes, config.edge_factor, config.queries, config.seed
    );
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(config.seed);
    let start = Instant::now();
    let graph = generate_random(config.nodes, config.edge_factor, &mut rng);
    info!("generated graph in {:?}", start.elapsed());
    println!("Graph has {} nodes and {} arcs", graph.node_count(), graph.arc_count());

    let queries: Vec<(usize, usize)> = (0..config.queries)
        .map(|_| (rng.gen_range(0..config.nodes), rng.gen_range(0..config.nodes)))
        .collect();

    let (sequential, found) = run_sequential(&graph, &queries);
    println!(
        "Sequential: {} of {} queries answered in {:?} ({:.3} ms/query)",
        found,
        queries.len(),
        sequential,
        sequential.as_secs_f64() * 1000.0 / queries.len().max(1) as f64
    );

    let (parallel, found) = run_parallel(&graph, &queries);
    println!(
        "Parallel:   {} of {} queries answered in {:?} ({} threads)",
        found,
        queries.len(),
        parallel,
        rayon::current_num_threads()
    );

    if parallel.as_secs_f64() > 0.0 {
        println!("Speedup: {:.2}x", sequential.as_secs_f64() / parallel.as_secs_f64());
    }
}

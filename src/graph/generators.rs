use crate::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::Rng;

/// Generates a random directed graph with `n` nodes (ids `0..n`) and roughly
/// `edge_factor * n` arcs with weights in `[1, 100)`
///
/// Self-loops are skipped; drawing the same pair twice keeps the later weight.
pub fn generate_random<R: Rng>(
    n: usize,
    edge_factor: f64,
    rng: &mut R,
) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_node(v);
    }
    if n < 2 {
        return graph;
    }

    let num_arcs = (edge_factor * n as f64) as usize;
    for _ in 0..num_arcs {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_arc(u, v, weight);
        }
    }

    graph
}

/// Generates a `width * height` grid with 8-connectivity
///
/// Node `y * width + x` sits at `(x, y)`. Straight moves cost 1.0 and diagonal
/// moves cost 1.4.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);
    for v in 0..(width * height) {
        graph.add_node(v);
    }

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let node = y * width + x;
            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_arc(node, neighbor, OrderedFloat(cost));
                }
            }
        }
    }

    graph
}

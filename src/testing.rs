use super::{exact::START_VERTEX, graph::*, utils::Path};
use itertools::Itertools as _;
use rand::Rng;

/// Endless stream of random graphs in which each (ordered, for directed graphs) pair of distinct
/// nodes is connected with probability `p`. Every fifth edge weighs 0.
pub fn random_weighted_graphs(
    rng: &mut impl Rng,
    n: NumNodes,
    p: f64,
    directed: bool,
) -> impl Iterator<Item = AdjMatrix> + '_ {
    std::iter::repeat_with(move || {
        let mut graph = AdjMatrix::new(n, directed);
        for u in 0..n {
            let first = if directed { 0 } else { u + 1 };
            for v in first..n {
                if u == v || !rng.gen_bool(p) {
                    continue;
                }
                let weight = if rng.gen_ratio(1, 5) {
                    0
                } else {
                    rng.gen_range(1..50)
                };
                graph.add_edge(u, v, weight);
            }
        }
        graph
    })
}

/// Minimum weight over all Hamiltonian cycles through [`START_VERTEX`], obtained by trying
/// every order of the remaining nodes.
pub fn brute_force_min_tour_weight(graph: &AdjMatrix) -> Option<PathWeight> {
    let n = graph.number_of_nodes();
    if n == 1 {
        return graph.edge_weight(0, 0).map(PathWeight::from);
    }

    (0..n)
        .filter(|&u| u != START_VERTEX)
        .permutations(n as usize - 1)
        .filter_map(|order| {
            std::iter::once(START_VERTEX)
                .chain(order)
                .chain(std::iter::once(START_VERTEX))
                .tuple_windows()
                .map(|(u, v)| graph.edge_weight(u, v).map(PathWeight::from))
                .sum::<Option<PathWeight>>()
        })
        .min()
}

pub fn assert_tour_is_hamiltonian(graph: &AdjMatrix, tour: &Path) {
    let vertices = tour.vertices().collect_vec();
    let n = graph.number_of_nodes() as usize;

    assert_eq!(vertices.len(), n + 1, "tour: {vertices:?}");
    assert_eq!(vertices.first(), Some(&START_VERTEX));
    assert_eq!(vertices.last(), Some(&START_VERTEX));
    assert_eq!(vertices[..n].iter().unique().count(), n, "tour: {vertices:?}");
    assert!(
        vertices
            .iter()
            .tuple_windows()
            .all(|(&u, &v)| graph.has_edge(u, v)),
        "tour uses a missing edge: {vertices:?}"
    );
}

#[test]
fn oracle_on_known_instance() {
    let graph = AdjMatrix::test_only_from(
        4,
        false,
        [(0, 1, 1), (0, 2, 4), (0, 3, 3), (1, 2, 2), (1, 3, 5), (2, 3, 6)],
    );
    assert_eq!(brute_force_min_tour_weight(&graph), Some(12));

    let graph = AdjMatrix::test_only_from(3, true, [(0, 1, 1), (1, 2, 1)]);
    assert_eq!(brute_force_min_tour_weight(&graph), None);
}

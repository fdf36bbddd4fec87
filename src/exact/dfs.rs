use std::time::Instant;

use itertools::Itertools;
use log::{debug, info};

use super::{START_VERTEX, budget::*};
use crate::{graph::*, utils::Path};

pub trait TourSearchableGraph: GraphNodeOrder + AdjacencyTest + VisitState {}

impl<G> TourSearchableGraph for G where G: GraphNodeOrder + AdjacencyTest + VisitState {}

/// Statistics of a single run of [`TourSearch`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Number of recursive calls, i.e. partial paths extended by one vertex
    pub expansions: u64,
    /// Number of partial paths covering all vertices and ending next to the start vertex
    pub complete_tours: u64,
    /// How often the incumbent was replaced
    pub improvements: u64,
    /// *false* if the budget ran out before all branches were exhausted
    pub completed: bool,
}

/// # Exhaustive tour search by depth-first backtracking
///
/// Enumerates every simple path leaving the start vertex along existing edges, in order of
/// increasing neighbor index. Whenever the working path covers all vertices and its last vertex
/// has an edge back to the start, the closed cycle is compared with the incumbent. The incumbent
/// is replaced if there is none yet or if the cycle is strictly lighter; among tours of equal
/// weight the first one found is kept.
///
/// The graph's visited flags and the working path form the shared search state. Each recursive
/// call undoes all of its mutations before returning, so both are in their original state when
/// the search ends (also if it ends early due to the [`SearchBudget`]).
///
/// The search takes `O((n-1)!)` time in the worst case.
pub struct TourSearch<'a, G> {
    graph: &'a mut G,
    working: &'a mut Path,
    best: &'a mut Path,
    budget: SearchBudget,
    start: Node,
    tracker: Option<BudgetTracker>,
    aborted: bool,
    report: SearchReport,
}

impl<'a, G: TourSearchableGraph> TourSearch<'a, G> {
    /// Both paths need a capacity of at least `n + 1`. The working path has to be empty.
    /// If `best` already holds a tour, only strictly lighter tours replace it.
    pub fn new(graph: &'a mut G, working: &'a mut Path, best: &'a mut Path) -> Self {
        Self {
            graph,
            working,
            best,
            budget: SearchBudget::default(),
            start: START_VERTEX,
            tracker: None,
            aborted: false,
            report: SearchReport::default(),
        }
    }

    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_start(mut self, start: Node) -> Self {
        self.start = start;
        self
    }

    pub fn run(mut self) -> SearchReport {
        if self.graph.is_empty() {
            self.report.completed = true;
            return self.report;
        }

        let n = self.graph.number_of_nodes();
        assert!(self.start < n, "start vertex {} out of range", self.start);
        assert!(self.working.is_empty(), "working path must be empty");
        assert!(
            self.working.capacity() > n && self.best.capacity() > n,
            "paths need a capacity of at least {}",
            n + 1
        );
        debug_assert_eq!(self.graph.number_of_visited(), 0);

        let timer = Instant::now();
        self.tracker = Some(self.budget.start());
        self.explore(self.start);
        self.report.completed = !self.aborted;

        debug_assert_eq!(self.graph.number_of_visited(), 0);
        debug_assert!(self.working.is_empty());

        info!(
            "Tour search on n={n} finished in {}ms: {:?}",
            timer.elapsed().as_millis(),
            self.report
        );

        self.report
    }

    fn explore(&mut self, node: Node) {
        self.graph.visit(node);
        self.working.add(node, &*self.graph);

        self.report.expansions += 1;
        if self
            .tracker
            .as_ref()
            .is_some_and(|t| t.is_exhausted(self.report.expansions))
        {
            self.aborted = true;
        }

        let n = self.graph.number_of_nodes();
        let closes = self.working.len() == n && self.graph.has_edge(node, self.start);
        self.report.complete_tours += closes as u64;

        for next in self.graph.vertices() {
            if self.aborted {
                break;
            }

            if self.graph.has_edge(node, next) && !self.graph.is_visited(next) {
                self.explore(next);
            }

            if closes {
                self.evaluate_tour();
            }
        }

        self.graph.unvisit(node);
        self.working.remove(&*self.graph);
    }

    /// Temporarily closes the working path with the start vertex and records it if it beats
    /// the incumbent.
    fn evaluate_tour(&mut self) {
        self.working.add(self.start, &*self.graph);

        if self.best.is_empty() || self.working.total_weight() < self.best.total_weight() {
            self.best.copy_from(&*self.working);
            self.report.improvements += 1;
            debug!(
                "New incumbent with weight {}: {}",
                self.best.total_weight(),
                self.best.vertices().format(" ")
            );
        }

        self.working.remove(&*self.graph);
    }
}

/// Searches a minimum weight tour through `node` without any budget.
/// `working` must be empty; the result is stored in `best`, which remains empty if the graph
/// has no Hamiltonian cycle.
pub fn dfs<G: TourSearchableGraph>(
    node: Node,
    graph: &mut G,
    working: &mut Path,
    best: &mut Path,
) -> SearchReport {
    TourSearch::new(graph, working, best)
        .with_budget(SearchBudget::unlimited())
        .with_start(node)
        .run()
}

/// Allocates the working and incumbent paths and searches a minimum weight tour starting
/// at [`START_VERTEX`]. Returns `None` as tour if none exists (or none was found within the
/// budget).
///
/// # Example
/// ```
/// use tsp::prelude::*;
/// let mut graph = AdjMatrix::test_only_from(3, false, [(0, 1, 1), (1, 2, 2), (2, 0, 3)]);
/// let (tour, report) = shortest_tour(&mut graph, SearchBudget::unlimited());
/// assert!(report.completed);
/// assert_eq!(tour.unwrap().total_weight(), 6);
/// ```
pub fn shortest_tour<G: TourSearchableGraph>(
    graph: &mut G,
    budget: SearchBudget,
) -> (Option<Path>, SearchReport) {
    let capacity = graph.number_of_nodes() + 1;
    let mut working = Path::new(capacity);
    let mut best = Path::new(capacity);

    let report = TourSearch::new(graph, &mut working, &mut best)
        .with_budget(budget)
        .run();

    ((!best.is_empty()).then_some(best), report)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{errors::InvariantCheck, testing::*};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn beaches() -> AdjMatrix {
        let mut graph = AdjMatrix::test_only_from(
            4,
            false,
            [(0, 1, 1), (0, 2, 4), (0, 3, 3), (1, 2, 2), (1, 3, 5), (2, 3, 6)],
        );
        for (u, name) in ["A", "B", "C", "D"].into_iter().enumerate() {
            graph.set_vertex_name(u as Node, name);
        }
        graph
    }

    #[test]
    fn complete_graph_on_four() {
        let mut graph = beaches();
        let mut working = Path::new(5);
        let mut best = Path::new(5);

        let report = dfs(START_VERTEX, &mut graph, &mut working, &mut best);

        assert_eq!(best.total_weight(), 12);
        assert_eq!(best.vertices().collect_vec(), vec![0, 1, 2, 3, 0]);
        assert_eq!(best.on(&graph).to_string(), "A -> B -> C -> D -> A");
        assert!(best.on(&graph).is_correct().is_ok());

        assert_eq!(
            report,
            SearchReport {
                expansions: 16,
                complete_tours: 6,
                improvements: 1,
                completed: true
            }
        );

        assert!(working.is_empty());
        assert_eq!(working.total_weight(), 0);
        assert_eq!(graph.number_of_visited(), 0);
    }

    #[test]
    fn directed_without_return() {
        let mut graph = AdjMatrix::test_only_from(3, true, [(0, 1, 1), (1, 2, 1)]);
        let (tour, report) = shortest_tour(&mut graph, SearchBudget::unlimited());

        assert!(tour.is_none());
        assert!(report.completed);
        assert_eq!(report.complete_tours, 0);
        assert_eq!(graph.number_of_visited(), 0);
    }

    #[test]
    fn directed_acyclic_graph() {
        let n = 6;
        let edges = (0..n).tuple_combinations().map(|(u, v)| (u, v, u + v + 1));
        let mut graph = AdjMatrix::test_only_from(n, true, edges);

        let mut working = Path::new(n + 1);
        let mut best = Path::new(n + 1);
        dfs(START_VERTEX, &mut graph, &mut working, &mut best);

        assert_eq!(best.total_weight(), 0);
        assert!(best.is_empty());
    }

    #[test]
    fn directed_cycle() {
        let mut graph = AdjMatrix::test_only_from(
            4,
            true,
            [(0, 1, 2), (1, 2, 2), (2, 3, 2), (3, 0, 2), (0, 3, 1), (3, 2, 1)],
        );
        let (tour, _) = shortest_tour(&mut graph, SearchBudget::unlimited());
        let tour = tour.unwrap();

        assert_eq!(tour.vertices().collect_vec(), vec![0, 1, 2, 3, 0]);
        assert_eq!(tour.total_weight(), 8);
    }

    #[test]
    fn first_of_equal_tours_is_kept() {
        let n = 5;
        let edges = (0..n).tuple_combinations().map(|(u, v)| (u, v, 1));
        let mut graph = AdjMatrix::test_only_from(n, false, edges);

        let (tour, report) = shortest_tour(&mut graph, SearchBudget::unlimited());
        let tour = tour.unwrap();

        assert_eq!(tour.vertices().collect_vec(), vec![0, 1, 2, 3, 4, 0]);
        assert_eq!(tour.total_weight(), 5);
        assert_eq!(report.improvements, 1);
        assert_eq!(report.complete_tours, 24);
    }

    #[test]
    fn zero_weight_tour() {
        let mut graph = AdjMatrix::test_only_from(3, false, [(0, 1, 0), (1, 2, 0), (2, 0, 0)]);
        let (tour, _) = shortest_tour(&mut graph, SearchBudget::unlimited());
        let tour = tour.unwrap();

        assert_eq!(tour.total_weight(), 0);
        assert_eq!(tour.len(), 4);
    }

    #[test]
    fn single_vertex() {
        let mut graph = AdjMatrix::new(1, false);
        let (tour, report) = shortest_tour(&mut graph, SearchBudget::unlimited());
        assert!(tour.is_none());
        assert_eq!(report.expansions, 1);

        graph.add_edge(0, 0, 7);
        let (tour, _) = shortest_tour(&mut graph, SearchBudget::unlimited());
        let tour = tour.unwrap();
        assert_eq!(tour.vertices().collect_vec(), vec![0, 0]);
        assert_eq!(tour.total_weight(), 7);
    }

    #[test]
    fn empty_graph() {
        let mut graph = AdjMatrix::new(0, false);
        let (tour, report) = shortest_tour(&mut graph, SearchBudget::unlimited());
        assert!(tour.is_none());
        assert!(report.completed);
        assert_eq!(report.expansions, 0);
    }

    #[test]
    fn other_start_vertex() {
        let mut graph = beaches();
        let mut working = Path::new(5);
        let mut best = Path::new(5);
        dfs(2, &mut graph, &mut working, &mut best);

        assert_eq!(best.vertices().collect_vec(), vec![2, 1, 0, 3, 2]);
        assert_eq!(best.total_weight(), 12);
    }

    #[test]
    fn incumbent_is_only_replaced_by_lighter_tours() {
        let mut graph = beaches();
        let mut working = Path::new(5);
        let mut best = Path::new(5);
        for u in [0, 3, 2, 1, 0] {
            best.add(u, &graph);
        }

        let report = dfs(START_VERTEX, &mut graph, &mut working, &mut best);
        assert_eq!(report.improvements, 0);
        assert_eq!(best.vertices().collect_vec(), vec![0, 3, 2, 1, 0]);
    }

    #[test]
    fn expansion_budget_restores_state() {
        let mut graph = beaches();
        let budget = SearchBudget::unlimited().with_max_expansions(5);
        let (tour, report) = shortest_tour(&mut graph, budget);

        assert!(!report.completed);
        assert_eq!(report.expansions, 6);
        assert_eq!(graph.number_of_visited(), 0);

        // 0 -> 1 -> 2 -> 3 is completed within the budget
        let tour = tour.unwrap();
        assert_eq!(tour.total_weight(), 12);
    }

    #[test]
    #[should_panic]
    fn paths_too_short() {
        let mut graph = beaches();
        let mut working = Path::new(4);
        let mut best = Path::new(4);
        dfs(START_VERTEX, &mut graph, &mut working, &mut best);
    }

    #[test]
    fn optimal_on_random_graphs() {
        let mut rng = Pcg64::seed_from_u64(0xC0FFEE);

        for n in 1..=6 {
            for directed in [false, true] {
                for p in [0.3, 0.6, 0.9] {
                    for mut graph in random_weighted_graphs(&mut rng, n, p, directed).take(30) {
                        let expected = brute_force_min_tour_weight(&graph);
                        let (tour, report) = shortest_tour(&mut graph, SearchBudget::unlimited());

                        assert!(report.completed);
                        assert_eq!(
                            tour.as_ref().map(|t| t.total_weight()),
                            expected,
                            "n={n} directed={directed} graph:\n{graph:?}"
                        );

                        if let Some(tour) = tour {
                            assert!(tour.on(&graph).is_correct().is_ok());
                            assert_tour_is_hamiltonian(&graph, &tour);
                        }
                        assert_eq!(graph.number_of_visited(), 0);
                    }
                }
            }
        }
    }
}

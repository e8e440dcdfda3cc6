//! Cross-checks the descriptor adapter against petgraph's stable graph.

use knit::graph::adapter;
use knit::Graph;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

struct Pair {
    ours: Graph<u32, u32>,
    theirs: StableDiGraph<u32, u32>,
    // (our descriptor, petgraph node)
    vertices: Vec<(usize, NodeIndex)>,
}

impl Pair {
    fn new(n: u32) -> Self {
        let mut ours = Graph::new();
        let mut theirs = StableDiGraph::new();
        let vertices = (0..n)
            .map(|i| (adapter::add_vertex_with(&mut ours, i), theirs.add_node(i)))
            .collect();
        Self {
            ours,
            theirs,
            vertices,
        }
    }

    fn connect(&mut self, a: usize, b: usize, weight: u32) {
        let (sa, pa) = self.vertices[a];
        let (sb, pb) = self.vertices[b];
        adapter::add_edge_with(&mut self.ours, sa, sb, weight);
        self.theirs.add_edge(pa, pb, weight);
    }

    fn assert_same(&self) {
        assert_eq!(adapter::num_vertices(&self.ours), self.theirs.node_count());
        assert_eq!(adapter::num_edges(&self.ours), self.theirs.edge_count());

        for &(ours, theirs) in &self.vertices {
            assert_eq!(
                adapter::out_degree(&self.ours, ours),
                self.theirs.edges_directed(theirs, Direction::Outgoing).count()
            );
            assert_eq!(
                adapter::in_degree(&self.ours, ours),
                self.theirs.edges_directed(theirs, Direction::Incoming).count()
            );

            let mut mine: Vec<u32> = adapter::out_edges(&self.ours, ours)
                .map(|e| *self.ours.edge(self.ours.edge_id(e).unwrap()))
                .collect();
            let mut other: Vec<u32> = self
                .theirs
                .edges_directed(theirs, Direction::Outgoing)
                .map(|e| *e.weight())
                .collect();
            mine.sort_unstable();
            other.sort_unstable();
            assert_eq!(mine, other);
        }
    }
}

fn pseudo_random_pairs(n: usize, count: usize) -> Vec<(usize, usize)> {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let a = (state % n as u64) as usize;
            let b = ((state >> 32) % n as u64) as usize;
            (a, b)
        })
        .collect()
}

#[test]
fn test_degrees_match_petgraph() {
    let mut pair = Pair::new(20);
    for (i, (a, b)) in pseudo_random_pairs(20, 120).into_iter().enumerate() {
        pair.connect(a, b, i as u32);
    }
    pair.assert_same();
}

#[test]
fn test_vertex_removal_matches_petgraph() {
    let mut pair = Pair::new(12);
    for (i, (a, b)) in pseudo_random_pairs(12, 60).into_iter().enumerate() {
        pair.connect(a, b, i as u32);
    }

    for victim in [3, 7, 0] {
        let at = pair
            .vertices
            .iter()
            .position(|&(_, node)| node.index() == victim)
            .unwrap();
        let (ours, theirs) = pair.vertices.remove(at);
        adapter::remove_vertex(&mut pair.ours, ours);
        pair.theirs.remove_node(theirs);
        pair.assert_same();
    }
}

#[test]
fn test_remove_edge_if_matches_retain_edges() {
    let mut pair = Pair::new(8);
    for (i, (a, b)) in pseudo_random_pairs(8, 40).into_iter().enumerate() {
        pair.connect(a, b, i as u32);
    }

    let ours = &pair.ours;
    let odd: Vec<usize> = adapter::edges(ours)
        .filter(|&e| *ours.edge(ours.edge_id(e).unwrap()) % 2 == 1)
        .collect();
    adapter::remove_edge_if(&mut pair.ours, |e| odd.contains(&e));
    pair.theirs.retain_edges(|g, e| g[e] % 2 == 0);
    pair.assert_same();

    let (hub, node) = pair.vertices[0];
    adapter::clear_vertex(&mut pair.ours, hub);
    let incident: Vec<_> = pair
        .theirs
        .edges_directed(node, Direction::Outgoing)
        .chain(pair.theirs.edges_directed(node, Direction::Incoming))
        .map(|e| e.id())
        .collect();
    for e in incident {
        pair.theirs.remove_edge(e);
    }
    pair.assert_same();
}

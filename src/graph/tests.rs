use super::*;

fn path_graph_symmetric() -> GraphView<()> {
    // 0 - 1 - 2 - 3, undirected (symmetric): each edge listed both ways.
    let offsets = vec![0, 1, 3, 5, 6];
    let edges: Vec<Vid> = vec![1, 0, 2, 1, 3, 2];
    GraphView::from_csr_unchecked(offsets, edges, None, true)
}

#[test]
fn symmetric_graph_reuses_out_edges_for_in_edges() {
    let g = path_graph_symmetric();
    assert!(g.is_symmetric());
    for u in 0..g.n() as Vid {
        let out: Vec<_> = g.out_neighbors(u).iter().map(|(v, _)| v).collect();
        let inn: Vec<_> = g.in_neighbors(u).iter().map(|(v, _)| v).collect();
        assert_eq!(out, inn);
    }
}

#[test]
fn asymmetric_graph_transposes_correctly() {
    // 0->1, 0->2, 1->2
    let g = GraphView::<()>::from_csr_unchecked(vec![0, 2, 3, 3], vec![1, 2, 2], None, false);
    assert!(!g.is_symmetric());
    assert_eq!(g.out_degree(0), 2);
    assert_eq!(g.in_degree(2), 2);
    let mut preds: Vec<_> = g.in_neighbors(2).iter().map(|(v, _)| v).collect();
    preds.sort();
    assert_eq!(preds, vec![0, 1]);
    assert_eq!(g.in_degree(1), 1);
}

#[test]
fn weighted_edges_round_trip() {
    let offsets = vec![0, 2, 2];
    let edges: Vec<Vid> = vec![1, 1];
    let weights = vec![10u32, 20u32];
    let g = GraphView::from_csr_unchecked(offsets, edges, Some(weights), false);
    let got: Vec<_> = g.out_neighbors(0).iter().collect();
    assert_eq!(got, vec![(1, 10), (1, 20)]);
}

#[test]
fn break_early_decode_stops_at_first_acceptance() {
    let g = path_graph_symmetric();
    let mut visited = Vec::new();
    g.out_neighbors(1).decode_break_early(|v, _w| {
        visited.push(v);
        BreakEarly::stop_if(v == 2)
    });
    assert_eq!(visited, vec![0, 2]);
}

#[test]
fn full_decode_visits_every_neighbor() {
    let g = path_graph_symmetric();
    let mut visited = Vec::new();
    g.out_neighbors(1).decode(|v, _w| visited.push(v));
    assert_eq!(visited, vec![0, 2]);
}

#[test]
fn neighbors_direction_flag_selects_in_or_out() {
    let g = GraphView::<()>::from_csr_unchecked(vec![0, 2, 3, 3], vec![1, 2, 2], None, false);
    let out0: Vec<_> = g.neighbors(0, false).iter().map(|(v, _)| v).collect();
    let in2: Vec<_> = g.neighbors(2, true).iter().map(|(v, _)| v).collect();
    assert_eq!(out0, vec![1, 2]);
    let mut in2 = in2;
    in2.sort();
    assert_eq!(in2, vec![0, 1]);
}

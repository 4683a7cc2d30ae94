mod coloring {
    use bgraphs::{
        Algorithm, Directed, Graph, GraphError, UDGraph, colorize, colorize_by_name,
        graph_test_support::{ArbBipartiteGraph, ArbSimpleGraph},
    };
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_adjacency_of_directed_sample() {
        let graph = Graph::<Directed>::from_edges(&[(0, 1), (0, 3), (1, 2), (2, 0), (2, 3), (3, 2)]);
        assert_eq!(graph.max_degree(), 2);
        assert_eq!(
            graph.adjacency(),
            &[vec![1, 3], vec![2], vec![0, 3], vec![2]]
        );
    }

    #[test]
    fn test_both_algorithms_on_a_multigraph() {
        // K(2,2) with every edge doubled: 4-regular.
        let graph = UDGraph::from_edges(&[
            (0, 2),
            (0, 2),
            (0, 3),
            (0, 3),
            (1, 2),
            (1, 2),
            (1, 3),
            (1, 3),
        ]);
        for algorithm in [Algorithm::Vizing, Algorithm::ColeHopcroft] {
            let coloring = colorize(&graph, algorithm).unwrap();
            assert!(coloring.is_proper(&graph), "{algorithm}");
            assert_eq!(coloring.len(), 8);
        }
        let coloring = colorize(&graph, Algorithm::ColeHopcroft).unwrap();
        assert_eq!(coloring.num_colors(), 4);
        assert_eq!(coloring.colors(0, 2).len(), 2);
    }

    #[test]
    fn test_edgeless_graph() {
        let graph = UDGraph::with_vertices(3);
        for algorithm in [Algorithm::Vizing, Algorithm::ColeHopcroft] {
            assert!(colorize(&graph, algorithm).unwrap().is_empty());
        }
    }

    #[test]
    fn test_errors() {
        let looped = UDGraph::from_edges(&[(0, 1), (1, 1)]);
        assert_eq!(colorize(&looped, Algorithm::Vizing), Err(GraphError::SelfLoop(1)));
        assert_eq!(
            colorize(&looped, Algorithm::ColeHopcroft),
            Err(GraphError::NotBipartite)
        );
        assert_eq!(
            colorize_by_name(&looped, "Konig"),
            Err(GraphError::UnknownAlgorithm("Konig".to_string()))
        );
    }

    #[cfg(feature = "slow_tests")]
    #[test]
    fn test_large_regular_multigraph() {
        // K(40, 40) with a second copy of every edge between even vertices.
        let mut edges = Vec::new();
        for left in 0..40 {
            for right in 40..80 {
                edges.push((left, right));
                if left % 2 == 0 && right % 2 == 0 {
                    edges.push((right, left));
                }
            }
        }
        let graph = UDGraph::from_edges(&edges);
        assert_eq!(graph.max_degree(), 60);

        let coloring = colorize(&graph, Algorithm::ColeHopcroft).unwrap();
        assert!(coloring.is_proper(&graph));
        assert_eq!(coloring.num_colors(), 60);

        let coloring = colorize(&graph, Algorithm::Vizing).unwrap();
        assert!(coloring.is_proper(&graph));
        assert!(coloring.num_colors() <= 61);
    }

    #[quickcheck]
    fn prop_cole_hopcroft_is_optimal(ArbBipartiteGraph { graph }: ArbBipartiteGraph) -> bool {
        let coloring = colorize(&graph, Algorithm::ColeHopcroft).unwrap();
        coloring.is_proper(&graph) && coloring.num_colors() == graph.max_degree()
    }

    #[quickcheck]
    fn prop_vizing_within_bound(ArbSimpleGraph { graph }: ArbSimpleGraph) -> bool {
        let coloring = colorize_by_name(&graph, "Vising").unwrap();
        coloring.is_proper(&graph) && coloring.num_colors() <= graph.max_degree() + 1
    }
}

mod support;

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use searcher::{Mode, Search, SearchError, Strategy};
use support::Walled;

#[test]
fn shared_search() {
    let grid = Walled::open(8, 8);
    let search = Search::with_heuristic(Strategy::AStar, Mode::Graph, grid.manhattan()).unwrap();
    let expected = search.run(&grid).unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| search.run(&grid).unwrap()))
            .collect();
        for handle in handles {
            let solution = handle.join().unwrap();
            assert_eq!(solution.actions, expected.actions);
            assert_eq!(solution.metrics.nodes_expanded, expected.metrics.nodes_expanded);
        }
    });
}

#[test]
fn different_strategies_side_by_side() {
    let grid = Walled::open(6, 6);
    thread::scope(|scope| {
        let handles: Vec<_> = [Strategy::BreadthFirst, Strategy::UniformCost, Strategy::DepthFirst]
            .into_iter()
            .map(|strategy| {
                let grid = &grid;
                scope.spawn(move || Search::new(strategy, Mode::Bidirectional).unwrap().run(grid))
            })
            .collect();
        for handle in handles {
            let solution = handle.join().unwrap().unwrap();
            assert_eq!(solution.state, (5, 5));
        }
    });
}

#[test]
fn cancelled_from_another_thread() {
    // Far too large to finish before the flag is raised.
    let grid = Walled::open(2_000, 2_000);
    let started = AtomicBool::new(false);
    let stop = AtomicBool::new(false);
    let search = Search::new(Strategy::BreadthFirst, Mode::Graph).unwrap();

    let result = thread::scope(|scope| {
        let runner = scope.spawn(|| {
            search.run_with(&grid, |_| {
                started.store(true, Ordering::SeqCst);
                stop.load(Ordering::SeqCst)
            })
        });
        scope.spawn(|| {
            while !started.load(Ordering::SeqCst) {
                thread::yield_now();
            }
            stop.store(true, Ordering::SeqCst);
        });
        runner.join().unwrap()
    });

    match result {
        Err(SearchError::Cancelled(metrics)) => assert!(metrics.nodes_expanded < 4_000_000),
        other => panic!("Expected cancellation, got {:?}", other.map(|s| s.len())),
    }
}

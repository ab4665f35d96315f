use crate::analysis::DependencyGraph;
use petgraph::graph::NodeIndex;

/// Enumerate circular reference chains by depth-first traversal from every
/// node in node order, using an explicit frame stack (no recursion, so deep
/// graphs cannot blow the call stack).
///
/// Reaching a node already on the current path records the sub-path from its
/// earliest occurrence as a cycle and stops descending. Reaching a node that
/// finished exploring elsewhere also stops descending, so the same cycle can
/// be reported once per distinct entry point; no deduplication is done.
pub fn find_cycles(graph: &DependencyGraph) -> Vec<Vec<String>> {
    let adjacency = graph.adjacency();
    let node_count = graph.node_count();

    let mut cycles = Vec::new();
    let mut visited = vec![false; node_count];
    let mut in_path = vec![false; node_count];
    let mut path: Vec<NodeIndex> = Vec::new();

    struct Frame {
        node: NodeIndex,
        next_edge: usize,
    }

    for start in graph.graph().node_indices() {
        if visited[start.index()] {
            continue;
        }

        let mut stack = vec![Frame {
            node: start,
            next_edge: 0,
        }];
        path.push(start);
        in_path[start.index()] = true;

        while let Some(frame) = stack.last_mut() {
            let out = &adjacency[frame.node.index()];

            if frame.next_edge < out.len() {
                let target = out[frame.next_edge];
                frame.next_edge += 1;

                if in_path[target.index()] {
                    // Earliest occurrence on the path through the current node.
                    let pos = path
                        .iter()
                        .position(|&n| n == target)
                        .expect("node flagged in_path must be on the path");
                    cycles.push(
                        path[pos..]
                            .iter()
                            .map(|&n| graph.name_of(n).to_string())
                            .collect(),
                    );
                } else if !visited[target.index()] {
                    stack.push(Frame {
                        node: target,
                        next_edge: 0,
                    });
                    path.push(target);
                    in_path[target.index()] = true;
                }
            } else {
                // Subtree finished: only now does the node join the visited set.
                visited[frame.node.index()] = true;
                in_path[frame.node.index()] = false;
                path.pop();
                stack.pop();
            }
        }
    }

    cycles
}

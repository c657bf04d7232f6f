//! Path extraction between two module instances.

use tracing::{debug, error, warn};

use crate::graph::{Graph, InstanceId, ModuleInstance, ModuleKind};

/// Find the modules strictly between `from` and `to`, in traversal order.
///
/// Starting at `from`, the walk follows outgoing connections until `to` is
/// reached. Ports carry at most one connection, so for a well-formed scheme
/// every module has at most one successor and this is a linear walk. A module
/// with several outgoing connections (a tank feeding several pumps, or a
/// malformed fan-out) is explored candidate by candidate in connection order.
///
/// Returns `None` when the walk dead-ends before `to`, when either endpoint is
/// unknown, or when every candidate revisits a module already on the walk (a
/// cycle, logged as an error).
pub fn find_path(graph: &Graph, from: InstanceId, to: InstanceId) -> Option<Vec<&ModuleInstance>> {
    let start = graph.index_of(from)?;
    let goal = graph.index_of(to)?;
    if start == goal {
        debug!(%from, "path requested from a module to itself");
        return None;
    }

    let n = graph.modules.len();
    let mut on_walk = vec![false; n];
    let mut explored = vec![false; n];

    // (module index, cursor into its successor list)
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    on_walk[start] = true;
    explored[start] = true;

    loop {
        let Some(top) = stack.last_mut() else {
            break;
        };
        let node = top.0;
        let succ = graph.successor_indices(node);
        let branching = succ.len() > 1 && !joins_several(&graph.modules[node]);
        if top.1 == 0 && branching && node != start {
            warn!(
                module = %graph.modules[node].label(),
                outgoing = succ.len(),
                "output port carries more than one connection"
            );
        }
        if top.1 >= succ.len() {
            on_walk[node] = false;
            stack.pop();
            continue;
        }
        let next = succ[top.1];
        top.1 += 1;

        if next == goal {
            let path: Vec<&ModuleInstance> =
                stack[1..].iter().map(|&(i, _)| &graph.modules[i]).collect();
            debug!(%from, %to, len = path.len(), "path found");
            return Some(path);
        }
        if on_walk[next] {
            error!(
                %from,
                %to,
                at = %graph.modules[next].instance_id,
                "cycle detected while extracting path"
            );
            continue;
        }
        if explored[next] {
            continue;
        }

        explored[next] = true;
        on_walk[next] = true;
        stack.push((next, 0));
    }

    debug!(%from, %to, "no path");
    None
}

/// Tanks and tees may carry several connections on one side.
pub(crate) fn joins_several(module: &ModuleInstance) -> bool {
    matches!(module.kind(), ModuleKind::TankOutput | ModuleKind::Splitter)
}

//! Dependency extraction from fetched files.

use super::sort::DepGraph;
use crate::fetch::FetchMap;
use crate::schema::{DependencyKind, File, FileDependency, ModId};

/// Whether an edge is followed under the optional-dependency policy.
fn keep_edge(dep: &FileDependency, include_optional: bool) -> bool {
    match dep.relation_type.kind() {
        DependencyKind::Required => true,
        DependencyKind::Optional => include_optional,
        DependencyKind::Other => false,
    }
}

/// Build the dependency graph of the successfully fetched files.
pub fn build_graph(include_optional: bool, files: &FetchMap<File>) -> DepGraph {
    let mut graph = DepGraph::new();
    for (id, fetched) in files {
        let Some(file) = fetched.ok() else {
            continue;
        };
        graph.add_node(
            *id,
            file.dependencies
                .iter()
                .filter(|d| keep_edge(d, include_optional))
                .map(|d| d.mod_id),
        );
    }
    graph
}

/// Topologically ordered IDs of the graph built from `files`.
///
/// The result contains the source IDs as well as their dependencies;
/// callers drop the IDs they already fetched.
pub fn extract_dependency_ids(include_optional: bool, files: &FetchMap<File>) -> Vec<ModId> {
    build_graph(include_optional, files).top_sort()
}

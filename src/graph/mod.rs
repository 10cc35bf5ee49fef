//! Dependency graph and topological ordering.
//!
//! A [`DepGraph`] maps each mod to the mods its selected file depends on.
//! It is built fresh for every resolution from the directly requested files
//! and is only used to order the dependency IDs; dependencies of
//! dependencies are not expanded.
//!
//! # Cycles
//!
//! [`DepGraph::top_sort`] never fails: a cycle is broken at the back edge met
//! while walking nodes in ascending ID order, and a warning is logged.
//! [`DepGraph::try_top_sort`] reports the cycle as
//! [`Error::CycleDetected`](crate::Error::CycleDetected) instead.
//!
//! # Examples
//!
//! ```rust
//! use modfetch::graph::DepGraph;
//! use modfetch::schema::ModId;
//!
//! let mut graph = DepGraph::new();
//! graph.add_node(ModId(10), [ModId(30)]);
//! graph.add_node(ModId(20), std::iter::empty());
//!
//! assert_eq!(graph.top_sort(), vec![ModId(30), ModId(10), ModId(20)]);
//! ```

pub mod extract;
pub mod sort;

pub use extract::{build_graph, extract_dependency_ids};
pub use sort::DepGraph;

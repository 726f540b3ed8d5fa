//! Index-based AST node store.
//!
//! Every node produced by one parse lives in one [`AstArena`] and is
//! addressed by a positional [`AstNodeId`]. Nodes are append-only and
//! write-once; the whole store is dropped or [`AstArena::reset`] in bulk.

use std::ops::Index;

use thiserror::Error;

use crate::lexer::Span;
use crate::parser::ast::Node;

/// Opaque AST node identifier for arena allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AstNodeId(u32);

impl AstNodeId {
    /// Creates a node id from a raw index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw arena index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Arena-level errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// Allocation would exceed configured node limit.
    #[error("node limit {limit} exceeded by allocation attempt {attempted}")]
    NodeLimitExceeded { limit: usize, attempted: usize },
}

/// Append-only node store with a node-count ceiling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstArena {
    max_nodes: usize,
    nodes: Vec<Node>,
    spans: Vec<Span>,
}

impl AstArena {
    /// Creates an arena with a maximum node count.
    pub fn new(max_nodes: usize) -> Self {
        Self {
            max_nodes,
            nodes: Vec::new(),
            spans: Vec::new(),
        }
    }

    /// Stores one node and returns its id.
    pub fn alloc(&mut self, node: Node, span: Span) -> Result<AstNodeId, ArenaError> {
        let attempted = self.nodes.len().saturating_add(1);
        let index = match u32::try_from(self.nodes.len()) {
            Ok(index) if self.nodes.len() < self.max_nodes => index,
            _ => {
                return Err(ArenaError::NodeLimitExceeded {
                    limit: self.max_nodes,
                    attempted,
                });
            }
        };

        self.nodes.push(node);
        self.spans.push(span);
        Ok(AstNodeId::new(index))
    }

    /// Returns the node behind `id`, if it belongs to this arena.
    pub fn get(&self, id: AstNodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Returns the source span recorded for `id`.
    pub fn span(&self, id: AstNodeId) -> Option<Span> {
        self.spans.get(id.index()).copied()
    }

    /// Returns configured max nodes.
    pub const fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// Returns allocated node count.
    pub fn allocated_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns remaining node capacity.
    pub fn remaining_capacity(&self) -> usize {
        self.max_nodes.saturating_sub(self.nodes.len())
    }

    /// Returns `true` when no node has been stored.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (AstNodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (AstNodeId::new(index as u32), node))
    }

    /// Drops every node, keeping allocated capacity.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.spans.clear();
    }
}

impl Index<AstNodeId> for AstArena {
    type Output = Node;

    fn index(&self, id: AstNodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

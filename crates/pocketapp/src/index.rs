//! # Display Indexes
//!
//! Todos are identified by a [`TodoId`], which nobody wants to type. UIs show
//! a 1-based position instead (`1` is the newest todo) and hand that back when
//! the user acts on an item. This module maps between the two.
//!
//! Indexes are positional and therefore only valid against the list they were
//! computed from: after an add or a delete, `2` may name a different todo.
//! Resolve an index right before using it.

use crate::error::{Result, ValidationError};
use crate::model::{TodoId, TodoItem};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayTodo {
    pub index: usize,
    pub todo: TodoItem,
}

pub fn index_todos(items: &[TodoItem]) -> Vec<DisplayTodo> {
    items
        .iter()
        .enumerate()
        .map(|(i, todo)| DisplayTodo {
            index: i + 1,
            todo: todo.clone(),
        })
        .collect()
}

/// Parses a user-typed index. Accepts an optional leading `#`.
pub fn parse_index(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    match digits.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ValidationError::InvalidIndex(input.to_string()).into()),
    }
}

/// Looks up the id at a 1-based display index.
pub fn resolve_index(items: &[TodoItem], index: usize) -> Result<TodoId> {
    index
        .checked_sub(1)
        .and_then(|i| items.get(i))
        .map(|item| item.id())
        .ok_or_else(|| ValidationError::IndexNotFound(index).into())
}

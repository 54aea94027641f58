//! Category hierarchy helpers: tree ordering and breadcrumbs.

use std::collections::{HashMap, HashSet};

use shopdesk_core::CategoryId;

use crate::category::Category;

/// Separator placed (with surrounding spaces) between breadcrumb segments.
pub const BREADCRUMB_SEPARATOR: &str = ">>";

/// Order categories for tree display.
///
/// Depth-first from the roots, siblings by display order then id. Categories
/// that cannot be reached from a root (missing parent, cycles) are appended
/// afterwards, ordered by parent id, display order and id.
pub fn sort_for_tree(mut categories: Vec<Category>) -> Vec<Category> {
    categories.sort_by_key(|c| (c.parent_category_id, c.display_order, c.id));

    let mut children: HashMap<Option<CategoryId>, Vec<usize>> = HashMap::new();
    for (idx, c) in categories.iter().enumerate() {
        children.entry(c.parent_category_id).or_default().push(idx);
    }

    let mut order = Vec::with_capacity(categories.len());
    let mut placed = vec![false; categories.len()];
    // Explicit stack; children pushed in reverse so the first sibling pops first.
    let mut stack: Vec<usize> = children
        .get(&None)
        .map(|roots| roots.iter().rev().copied().collect())
        .unwrap_or_default();

    while let Some(idx) = stack.pop() {
        if placed[idx] {
            continue;
        }
        placed[idx] = true;
        order.push(idx);
        if let Some(kids) = children.get(&Some(categories[idx].id)) {
            stack.extend(kids.iter().rev().copied().filter(|k| !placed[*k]));
        }
    }

    order.extend((0..categories.len()).filter(|idx| !placed[*idx]));

    let mut slots: Vec<Option<Category>> = categories.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|idx| slots[idx].take())
        .collect()
}

/// Format the ancestor path of `category`, root first, e.g. `"Computers >> Notebooks"`.
///
/// The walk stops at a deleted category, a parent `lookup` cannot resolve, or
/// a category already visited.
pub fn format_breadcrumb<F>(category: &Category, mut lookup: F, separator: &str) -> String
where
    F: FnMut(CategoryId) -> Option<Category>,
{
    let mut names = Vec::new();
    let mut seen = HashSet::new();

    if category.deleted {
        return String::new();
    }
    seen.insert(category.id);
    names.push(category.name.clone());

    let mut parent = category.parent_category_id;
    while let Some(parent_id) = parent {
        if !seen.insert(parent_id) {
            break;
        }
        let Some(current) = lookup(parent_id) else {
            break;
        };
        if current.deleted {
            break;
        }
        names.push(current.name);
        parent = current.parent_category_id;
    }

    names.reverse();
    names.join(&format!(" {separator} "))
}

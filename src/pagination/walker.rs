use super::Budget;
use crate::error::AppError;
use crate::types::NotionId;
use std::collections::VecDeque;
use std::iter::FusedIterator;

/// An item that can sit in a block tree.
pub trait TreeNode {
    fn node_id(&self) -> &NotionId;
    fn has_children(&self) -> bool;
}

/// Breadth-first walk over the descendants of a root node.
///
/// Created by [`walk`]. The worklist holds ids whose children have not been
/// listed yet; `level` is the child stream currently being drained.
pub struct TreeWalker<T, I, F> {
    children_of: F,
    pending: VecDeque<NotionId>,
    level: Option<I>,
    budget: Budget,
    yielded: u64,
    finished: bool,
    _item: std::marker::PhantomData<fn() -> T>,
}

/// Yields every descendant of `root`, level by level.
///
/// `children_of` returns the (usually paginated) child stream of one node.
/// Each yielded item consumes one unit of `budget`; items reporting
/// `has_children` are queued and their children listed once everything
/// queued before them is done. The root itself is never yielded.
///
/// There is no cycle detection: a tree whose children point back at an
/// ancestor is walked until the budget runs out.
pub fn walk<T, I, F>(root: NotionId, children_of: F, budget: Budget) -> TreeWalker<T, I, F>
where
    T: TreeNode,
    I: Iterator<Item = Result<T, AppError>>,
    F: FnMut(&NotionId) -> I,
{
    TreeWalker {
        children_of,
        pending: VecDeque::from([root]),
        level: None,
        budget,
        yielded: 0,
        finished: false,
        _item: std::marker::PhantomData,
    }
}

impl<T, I, F> TreeWalker<T, I, F> {
    /// Items yielded so far.
    pub fn yielded(&self) -> u64 {
        self.yielded
    }

    /// What is left of the walk's budget.
    pub fn budget(&self) -> Budget {
        self.budget
    }

    fn finish(&mut self) {
        self.finished = true;
        self.level = None;
        self.pending.clear();
    }
}

impl<T, I, F> Iterator for TreeWalker<T, I, F>
where
    T: TreeNode,
    I: Iterator<Item = Result<T, AppError>>,
    F: FnMut(&NotionId) -> I,
{
    type Item = Result<T, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.budget.is_exhausted() {
            log::debug!("Walk budget exhausted after {} items", self.yielded);
            self.finish();
            return None;
        }

        loop {
            if let Some(level) = self.level.as_mut() {
                match level.next() {
                    Some(Ok(item)) => {
                        self.budget.consume();
                        self.yielded += 1;
                        if item.has_children() {
                            self.pending.push_back(item.node_id().clone());
                        }
                        return Some(Ok(item));
                    }
                    Some(Err(err)) => {
                        self.finish();
                        return Some(Err(err));
                    }
                    None => self.level = None,
                }
            }

            match self.pending.pop_front() {
                Some(id) => {
                    log::trace!("Listing children of {} ({} queued)", id, self.pending.len());
                    self.level = Some((self.children_of)(&id));
                }
                None => {
                    self.finished = true;
                    return None;
                }
            }
        }
    }
}

impl<T, I, F> FusedIterator for TreeWalker<T, I, F>
where
    T: TreeNode,
    I: Iterator<Item = Result<T, AppError>>,
    F: FnMut(&NotionId) -> I,
{
}

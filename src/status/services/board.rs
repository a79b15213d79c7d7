//! Board loading and optimistic column moves.

use crate::status::{
    domain::{Board, BoardColumn, WorkItem, WorkItemId, WorkItemKind},
    ports::WorkItemRepository,
};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use super::{WorkflowServiceError, WorkflowServiceResult};

/// Result of undoing a move whose save failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The task was restored to its previous column, position, and pointer.
    RolledBack,
    /// A later move of the same task superseded this one; nothing changed.
    Superseded,
}

/// A move applied locally but not yet confirmed by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending move must be kept to roll it back if the save fails"]
pub struct PendingMove {
    task_id: WorkItemId,
    revision: u64,
    from: BoardColumn,
    index: usize,
    to: BoardColumn,
    previous: WorkItem,
}

impl PendingMove {
    /// Returns the moved task's identifier.
    #[must_use]
    pub const fn task_id(&self) -> WorkItemId {
        self.task_id
    }

    /// Returns the column the task left.
    #[must_use]
    pub const fn source_column(&self) -> BoardColumn {
        self.from
    }

    /// Returns the column the task entered.
    #[must_use]
    pub const fn target_column(&self) -> BoardColumn {
        self.to
    }
}

/// Client-side board state for one project.
///
/// Moves are applied optimistically. Each move of a task bumps that task's
/// revision; a failed save is rolled back only while its revision is still
/// the latest, so responses to superseded moves are ignored.
#[derive(Debug, Clone, Default)]
pub struct BoardSession {
    board: Board<WorkItem>,
    revisions: HashMap<WorkItemId, u64>,
}

impl BoardSession {
    /// Creates a session by bucketing `tasks`.
    #[must_use]
    pub fn new(tasks: impl IntoIterator<Item = WorkItem>) -> Self {
        Self {
            board: Board::from_items(tasks),
            revisions: HashMap::new(),
        }
    }

    /// Returns the current board.
    #[must_use]
    pub const fn board(&self) -> &Board<WorkItem> {
        &self.board
    }

    /// Finds a task on the board.
    #[must_use]
    pub fn find(&self, task_id: WorkItemId) -> Option<&WorkItem> {
        let (column, index) = self.board.locate(|task| task.id() == task_id)?;
        self.board.column(column).get(index)
    }

    /// Returns the column holding a task.
    #[must_use]
    pub fn column_of(&self, task_id: WorkItemId) -> Option<BoardColumn> {
        self.board
            .locate(|task| task.id() == task_id)
            .map(|(column, _)| column)
    }

    /// Moves a task to the end of `target`, rewriting its status pointer to
    /// the column key. Any column may move to any other.
    ///
    /// Returns the pending move and the updated task to be saved.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowServiceError::NotOnBoard`] when the task is not on
    /// this board.
    pub fn begin_move(
        &mut self,
        task_id: WorkItemId,
        target: BoardColumn,
        clock: &impl Clock,
    ) -> WorkflowServiceResult<(PendingMove, WorkItem)> {
        let (from, index) = self
            .board
            .locate(|task| task.id() == task_id)
            .ok_or(WorkflowServiceError::NotOnBoard(task_id))?;
        let mut task = self
            .board
            .take(from, index)
            .ok_or(WorkflowServiceError::NotOnBoard(task_id))?;
        let previous = task.clone();
        task.select_status(target.as_str(), clock);
        let moved = task.clone();
        self.board.push(target, task);

        let revision = self.revisions.entry(task_id).or_insert(0);
        *revision += 1;
        let pending = PendingMove {
            task_id,
            revision: *revision,
            from,
            index,
            to: target,
            previous,
        };
        Ok((pending, moved))
    }

    /// Undoes a pending move after its save failed.
    pub fn rollback_move(&mut self, pending: PendingMove) -> MoveOutcome {
        if self.revisions.get(&pending.task_id) != Some(&pending.revision) {
            return MoveOutcome::Superseded;
        }
        if let Some((column, index)) = self.board.locate(|task| task.id() == pending.task_id) {
            drop(self.board.take(column, index));
        }
        self.board.insert(pending.from, pending.index, pending.previous);
        MoveOutcome::RolledBack
    }
}

/// Board orchestration service.
#[derive(Clone)]
pub struct BoardService<R, C>
where
    R: WorkItemRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> BoardService<R, C>
where
    R: WorkItemRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Loads the board of a project.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowServiceError::NotFound`] for unknown items,
    /// [`WorkflowServiceError::NotAProject`] when `project_id` names a task,
    /// and [`WorkflowServiceError::Repository`] when lookup fails.
    pub async fn load_board(
        &self,
        project_id: WorkItemId,
    ) -> WorkflowServiceResult<BoardSession> {
        let project = self
            .repository
            .find_by_id(project_id)
            .await?
            .ok_or(WorkflowServiceError::NotFound(project_id))?;
        if project.kind() != WorkItemKind::Project {
            return Err(WorkflowServiceError::NotAProject(project_id));
        }
        let tasks = self.repository.find_tasks_by_project(project_id).await?;
        Ok(BoardSession::new(tasks))
    }

    /// Moves a task to `target` and saves it, rolling the session back when
    /// the save fails.
    ///
    /// The session stays mutably borrowed until the save completes. Callers
    /// that keep editing the board while saves are in flight should call
    /// [`BoardSession::begin_move`], save the returned task themselves, and
    /// hand the [`PendingMove`] to [`BoardSession::rollback_move`] on
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowServiceError::NotOnBoard`] when the task is not on
    /// the board and [`WorkflowServiceError::Repository`] when the save
    /// fails.
    pub async fn move_task(
        &self,
        session: &mut BoardSession,
        task_id: WorkItemId,
        target: BoardColumn,
    ) -> WorkflowServiceResult<WorkItem> {
        let (pending, moved) = session.begin_move(task_id, target, &*self.clock)?;
        let from = pending.source_column();
        match self.repository.update(&moved).await {
            Ok(()) => {
                debug!(%task_id, %from, column = %target, "moved task");
                Ok(moved)
            }
            Err(err) => {
                let outcome = session.rollback_move(pending);
                warn!(%task_id, column = %target, ?outcome, %err, "task move failed");
                Err(err.into())
            }
        }
    }
}

//! Task board with status updates.

use philagri_core::TaskStatus;

use super::ViewError;
use crate::models::Task;
use crate::queries::farm::{TaskSummary, task_summary, tasks_with_status};
use crate::store::EntityStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    #[must_use]
    pub fn from_store(store: &EntityStore) -> Self {
        Self {
            tasks: store.tasks().to_vec(),
        }
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn summary(&self) -> TaskSummary {
        task_summary(&self.tasks)
    }

    /// One tab of the board.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Vec<&Task> {
        tasks_with_status(&self.tasks, status)
    }

    /// Move a task one step along its lifecycle.
    ///
    /// # Errors
    ///
    /// `UnknownId` if no task has `id`, `Transition` if `to` is not the next
    /// status. The board is consumed either way.
    pub fn update_status(mut self, id: &str, to: TaskStatus) -> Result<Self, ViewError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ViewError::unknown("task", id))?;
        task.status = task.status.transition_to(to)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> TaskBoard {
        TaskBoard::from_store(&EntityStore::seed())
    }

    fn status_of(board: &TaskBoard, id: &str) -> Option<TaskStatus> {
        board.tasks().iter().find(|t| t.id == id).map(|t| t.status)
    }

    #[test]
    fn test_start_pending_task() {
        let board = board()
            .update_status("t4", TaskStatus::InProgress)
            .unwrap_or_else(|_| TaskBoard { tasks: vec![] });
        assert_eq!(status_of(&board, "t4"), Some(TaskStatus::InProgress));
        assert_eq!(board.summary().in_progress, 3);
        assert_eq!(board.summary().pending, 1);
    }

    #[test]
    fn test_complete_in_progress_task() {
        let board = board().update_status("t2", TaskStatus::Completed);
        assert_eq!(
            board.ok().and_then(|b| status_of(&b, "t2")),
            Some(TaskStatus::Completed)
        );
    }

    #[test]
    fn test_skipping_a_step_is_rejected() {
        let result = board().update_status("t4", TaskStatus::Completed);
        assert!(matches!(result, Err(ViewError::Transition(_))));
    }

    #[test]
    fn test_unknown_task() {
        let result = board().update_status("t99", TaskStatus::InProgress);
        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some("no task with id t99".to_owned())
        );
    }

    #[test]
    fn test_store_is_untouched() {
        let store = EntityStore::seed();
        let _ = TaskBoard::from_store(&store).update_status("t4", TaskStatus::InProgress);
        assert_eq!(
            store.tasks().iter().find(|t| t.id == "t4").map(|t| t.status),
            Some(TaskStatus::Pending)
        );
    }

    #[test]
    fn test_columns_partition_the_board() {
        let board = board();
        let total: usize = TaskStatus::ALL.iter().map(|s| board.column(*s).len()).sum();
        assert_eq!(total, board.tasks().len());
    }
}

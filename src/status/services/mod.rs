//! Application services for status editing and board orchestration.

mod board;
mod editor;
mod error;

pub use board::{BoardService, BoardSession, MoveOutcome, PendingMove};
pub use editor::{AddStatusRequest, StatusEditorService, StatusPatch};
pub use error::{WorkflowServiceError, WorkflowServiceResult};

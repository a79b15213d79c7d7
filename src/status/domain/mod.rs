//! Domain model for work item statuses.
//!
//! Projects and tasks each own an ordered set of status definitions and a
//! free-standing status pointer. The domain covers editing those sets,
//! normalizing free-text statuses into canonical buckets, and grouping tasks
//! into board columns. Persistence stays outside the domain boundary.

mod board;
mod color;
mod config;
mod definition;
mod editor;
mod error;
mod ids;
mod normalizer;
mod set;
mod theme;
mod work_item;

pub use board::{Board, BoardItem, bucket};
pub use color::HexColor;
pub use config::WorkflowConfig;
pub use definition::{NewStatus, StatusDefinition};
pub use editor::StatusSetEditor;
pub use error::{ParseBoardColumnError, ParseWorkItemKindError, StatusDomainError};
pub use ids::{StatusId, WorkItemId};
pub use normalizer::{
    BoardColumn, NormalizedStatus, ThemeBucket, normalize_board, normalize_theme,
};
pub use set::{InsertPosition, StatusSet};
pub use theme::StatusTheme;
pub use work_item::{WorkItem, WorkItemKind, WorkItemRecord};

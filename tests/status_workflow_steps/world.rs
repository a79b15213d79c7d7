//! Shared world state for status workflow BDD scenarios.

use std::sync::Arc;

use camp_workflow::status::{
    adapters::memory::InMemoryWorkItemRepository,
    domain::{HexColor, WorkItem},
    services::{BoardService, BoardSession, StatusEditorService, WorkflowServiceError},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Editor service type used by the BDD world.
pub type TestEditorService = StatusEditorService<InMemoryWorkItemRepository, DefaultClock>;

/// Board service type used by the BDD world.
pub type TestBoardService = BoardService<InMemoryWorkItemRepository, DefaultClock>;

/// Scenario world for status workflow behaviour tests.
pub struct StatusWorkflowWorld {
    pub editor: TestEditorService,
    pub board: TestBoardService,
    pub task: Option<WorkItem>,
    pub session: Option<BoardSession>,
    pub last_result: Option<Result<WorkItem, WorkflowServiceError>>,
}

impl StatusWorkflowWorld {
    /// Creates a world whose services share one in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryWorkItemRepository::new());
        let clock = Arc::new(DefaultClock);
        Self {
            editor: StatusEditorService::new(Arc::clone(&repository), Arc::clone(&clock)),
            board: BoardService::new(repository, clock),
            task: None,
            session: None,
            last_result: None,
        }
    }

    /// Returns the scenario task or an error when none was created.
    pub fn task(&self) -> Result<&WorkItem, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Records an edit result, keeping the task current on success.
    pub fn record(&mut self, result: Result<WorkItem, WorkflowServiceError>) {
        if let Ok(ref updated) = result {
            self.task = Some(updated.clone());
        }
        self.last_result = Some(result);
    }
}

impl Default for StatusWorkflowWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StatusWorkflowWorld {
    StatusWorkflowWorld::default()
}

/// Colour used for statuses created in scenarios.
pub fn scenario_color() -> Result<HexColor, eyre::Report> {
    HexColor::new("#A855F7").map_err(|err| eyre::eyre!("invalid scenario colour: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

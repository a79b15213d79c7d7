//! Grouping of tasks into the four fixed board columns.

use super::{BoardColumn, normalize_board};

/// A record that can be placed on the board.
pub trait BoardItem {
    /// Returns the current status pointer, if any.
    fn status_title(&self) -> Option<&str>;

    /// Returns the legacy free-text status field, consulted when the
    /// pointer is missing or blank.
    fn legacy_status(&self) -> Option<&str> {
        None
    }

    /// Returns the board column the record belongs in.
    fn board_column(&self) -> BoardColumn {
        let pointer = self
            .status_title()
            .filter(|title| !title.trim().is_empty())
            .or_else(|| self.legacy_status());
        normalize_board(pointer).key
    }
}

impl<T: BoardItem + ?Sized> BoardItem for &T {
    fn status_title(&self) -> Option<&str> {
        (**self).status_title()
    }

    fn legacy_status(&self) -> Option<&str> {
        (**self).legacy_status()
    }
}

/// Items partitioned into the four board columns.
///
/// All four columns always exist, possibly empty. Items keep their input
/// order within a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<T> {
    todo: Vec<T>,
    in_progress: Vec<T>,
    testing: Vec<T>,
    completed: Vec<T>,
}

impl<T> Default for Board<T> {
    fn default() -> Self {
        Self {
            todo: Vec::new(),
            in_progress: Vec::new(),
            testing: Vec::new(),
            completed: Vec::new(),
        }
    }
}

impl<T: BoardItem> Board<T> {
    /// Buckets items by their normalized status.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let mut board = Self::default();
        for item in items {
            let column = item.board_column();
            board.push(column, item);
        }
        board
    }
}

impl<T> Board<T> {
    /// Creates a board with four empty columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the items of one column.
    #[must_use]
    pub fn column(&self, column: BoardColumn) -> &[T] {
        match column {
            BoardColumn::Todo => &self.todo,
            BoardColumn::InProgress => &self.in_progress,
            BoardColumn::Testing => &self.testing,
            BoardColumn::Completed => &self.completed,
        }
    }

    fn column_mut(&mut self, column: BoardColumn) -> &mut Vec<T> {
        match column {
            BoardColumn::Todo => &mut self.todo,
            BoardColumn::InProgress => &mut self.in_progress,
            BoardColumn::Testing => &mut self.testing,
            BoardColumn::Completed => &mut self.completed,
        }
    }

    /// Iterates all columns in board order.
    pub fn columns(&self) -> impl Iterator<Item = (BoardColumn, &[T])> {
        BoardColumn::ALL
            .into_iter()
            .map(move |column| (column, self.column(column)))
    }

    /// Returns the total number of items on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns().map(|(_, items)| items.len()).sum()
    }

    /// Returns `true` when every column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds the first item matching `predicate`, returning its column and
    /// index within the column.
    pub fn locate(&self, predicate: impl Fn(&T) -> bool) -> Option<(BoardColumn, usize)> {
        self.columns().find_map(|(column, items)| {
            items
                .iter()
                .position(&predicate)
                .map(|index| (column, index))
        })
    }

    /// Appends an item to a column.
    pub fn push(&mut self, column: BoardColumn, item: T) {
        self.column_mut(column).push(item);
    }

    /// Inserts an item into a column at `index`, clamped to the column length.
    pub fn insert(&mut self, column: BoardColumn, index: usize, item: T) {
        let items = self.column_mut(column);
        let at = index.min(items.len());
        items.insert(at, item);
    }

    /// Removes and returns the item at `index` in a column.
    pub fn take(&mut self, column: BoardColumn, index: usize) -> Option<T> {
        let items = self.column_mut(column);
        (index < items.len()).then(|| items.remove(index))
    }

    /// Returns a mutable reference to the item at `index` in a column.
    pub fn get_mut(&mut self, column: BoardColumn, index: usize) -> Option<&mut T> {
        self.column_mut(column).get_mut(index)
    }

    /// Consumes the board, yielding every item in board order.
    pub fn into_items(self) -> impl Iterator<Item = T> {
        self.todo
            .into_iter()
            .chain(self.in_progress)
            .chain(self.testing)
            .chain(self.completed)
    }
}

/// Buckets items into board columns.
///
/// ```
/// use camp_workflow::status::domain::{BoardColumn, BoardItem, bucket};
///
/// struct Card(&'static str);
///
/// impl BoardItem for Card {
///     fn status_title(&self) -> Option<&str> {
///         Some(self.0)
///     }
/// }
///
/// let board = bucket([Card("Doing"), Card("done"), Card("weird-value")]);
/// assert_eq!(board.column(BoardColumn::Todo).len(), 1);
/// assert_eq!(board.column(BoardColumn::Testing).len(), 0);
/// ```
pub fn bucket<T: BoardItem>(items: impl IntoIterator<Item = T>) -> Board<T> {
    Board::from_items(items)
}

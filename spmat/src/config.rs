//! Configuration for parallel multiplication and pretty printing
//!
//! Both configs follow the same builder shape: start from `Default` and
//! refine with `with_*` methods.

/// Configuration for row-parallel multiplication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimum number of non-empty left-operand rows before work is spread
    /// across threads; smaller products run sequentially
    pub min_rows_for_parallel: usize,
    /// Size of a dedicated thread pool, `None` uses the global rayon pool
    pub num_threads: Option<usize>,
}

impl ParallelConfig {
    /// Config that always dispatches to the thread pool
    pub fn always() -> Self {
        Self {
            min_rows_for_parallel: 0,
            num_threads: None,
        }
    }

    /// Set the row threshold for parallel dispatch
    pub fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows_for_parallel = min_rows;
        self
    }

    /// Run on a dedicated pool of `threads` workers
    pub fn with_num_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads);
        self
    }

    /// Whether a product with `rows` non-empty left rows should go parallel
    pub fn should_parallelize(&self, rows: usize) -> bool {
        rows > 0 && rows >= self.min_rows_for_parallel
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            min_rows_for_parallel: 64,
            num_threads: None,
        }
    }
}

/// Configuration for the readable matrix printer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintConfig {
    /// Rows shown before truncating with `...`
    pub max_rows: usize,
    /// Columns shown before truncating with `...`
    pub max_cols: usize,
    /// Right-aligned width of each cell
    pub cell_width: usize,
}

impl PrintConfig {
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    pub fn with_max_cols(mut self, max_cols: usize) -> Self {
        self.max_cols = max_cols;
        self
    }

    pub fn with_cell_width(mut self, cell_width: usize) -> Self {
        self.cell_width = cell_width;
        self
    }
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            max_rows: 10,
            max_cols: 10,
            cell_width: 5,
        }
    }
}

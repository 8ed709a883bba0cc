//! Floor-plan editor core library
//!
//! Platform-agnostic data model and editing logic for the facility floor-plan
//! editor. No rendering happens here.

pub mod canvas;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod selection;
pub mod session;
pub mod shapes;
pub mod storage;
pub mod tools;

pub use canvas::{Canvas, FloorPlan, PlanData, TextEntry};
pub use config::{ConfigError, EditorConfig};
pub use error::{EditorError, EditorResult};
pub use history::{History, Snapshot};
pub use input::{EventOutcome, KeyCommand, KeyEvent, Modifiers, PointerEvent};
pub use selection::Selection;
pub use session::EditorSession;
pub use storage::{FileSink, MemorySink, PlanSink, StorageError, StorageResult};
pub use tools::{ToolKind, ToolManager};

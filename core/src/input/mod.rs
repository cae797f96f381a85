pub mod keys;
pub mod queue;
pub mod translate;

pub use queue::{EventKind, EventQueue, InputEvent};
pub use translate::KeyTranslator;

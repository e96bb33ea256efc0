pub mod constants;
pub mod error;
pub mod pool;
pub mod presentation;
pub mod selector;
pub mod shared_wheel_game;
pub mod validation;

pub use error::{Operation, WheelError};
pub use pool::{Entry, EntryId, Pool, PoolError};
pub use selector::{FixedIndex, IndexSource, RandomIndex};
pub use shared_wheel_game::{SpinOutcome, SpinState, WheelGame};

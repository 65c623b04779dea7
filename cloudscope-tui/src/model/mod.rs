//! Model 层：应用状态
//!
//! [`Session`] 是唯一的状态根，只有 Update 层可以修改它；
//! View 层只读取。

mod detail;
mod search;
mod session;

pub use detail::DetailState;
pub use search::SearchState;
pub use session::{Mode, Session};

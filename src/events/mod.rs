pub mod pointer;
pub mod resize;
pub mod scroll;

pub use pointer::wire_pointer_move;
pub use resize::wire_resize;
pub use scroll::{apply_scroll, wire_scroll};

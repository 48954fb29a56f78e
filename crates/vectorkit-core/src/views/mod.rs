//! Zero-copy views
//!
//! Views alias another vector's storage: writes through a view are visible
//! through the owner and through every other view over the same elements.
//! A view holds a strong handle to what it views, so the viewed storage
//! stays alive for as long as any view does.
//!
//! Views are normally created through [`VectorExt`](crate::VectorExt)
//! (`sub_vector`, `join`, `rotate_view`) rather than constructed directly.

mod empty;
mod joined;
mod window;

pub use empty::EmptyVector;
pub use joined::JoinedView;
pub use window::WindowView;

pub mod triangulation;

#[doc(inline)]
pub use triangulation::earclip::{signed_area, triangulate_list};
pub use triangulation::Triangulate;

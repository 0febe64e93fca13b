//! Create/edit dialog for one employee.
//!
//! - view_model.rs: draft type and save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::PegawaiDetails;
pub use view_model::PegawaiDraft;

pub mod form_field;
pub mod pagination_controls;
pub mod status_badge;

// NexusLinks state managers
// Managers own the bookmark collection, its derived view, and the input forms.

pub mod bookmark_manager;
pub mod form_manager;
pub mod view;

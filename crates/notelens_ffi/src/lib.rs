//! Flutter-facing bridge for NoteLens core.
//! Only thin, never-panicking wrappers live here; logic stays in core.

pub mod api;

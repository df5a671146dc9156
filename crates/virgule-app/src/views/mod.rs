// File: src/views/mod.rs
// Purpose: View modules referenced by the route table

pub mod loading_view;
pub mod main_view;

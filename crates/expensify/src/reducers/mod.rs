pub mod expenses_reducer;
pub mod filters_reducer;

/// CSV export of projection tables.
pub mod export;

#[path = "layout/columns.rs"]
mod columns;

#[path = "layout/balancer.rs"]
mod balancer;

#[cfg(test)]
#[path = "layout/tests.rs"]
mod tests;

pub use balancer::{column_width_for, layout_columns, ColumnBalancer};
pub use columns::{Column, Columns, Placement, Side};

// Shared glue for the `plates` and `islands` front ends
pub mod cli;
pub mod frame;
pub mod widgets;

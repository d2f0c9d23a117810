//! Library surface for the `singtool` binary: one module per command
//! group so the subcommand dispatch stays thin.

pub mod commands;

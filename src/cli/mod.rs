mod args;

pub use args::{CliArgs, Command, CommonArgs, InitArgs, PackArgs, SweepArgs};

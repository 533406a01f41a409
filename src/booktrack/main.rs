//! The `booktrack` binary is intentionally thin: the CLI lives in `cli/`,
//! this file only invokes `cli::run()`. All catalog logic is in the library.

mod cli;

fn main() {
    cli::run();
}

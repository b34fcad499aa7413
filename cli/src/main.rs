//! Binary entrypoint for font2icons-cli (made by FontLab https://www.fontlab.com/)

use std::process::ExitCode;

fn main() -> ExitCode {
    font2icons_cli::run()
}

use std::process::ExitCode;

fn main() -> ExitCode {
    lineage::cli::run()
}

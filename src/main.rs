fn main() {
    // All real work happens in cli::run; this just reports the failure.
    if let Err(err) = dirmat::cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

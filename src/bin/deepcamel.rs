fn main() {
    if let Err(e) = deepcamel::cli::run() {
        eprintln!("deepcamel: {}", e);
        std::process::exit(1);
    }
}

fn main() {
    if let Err(err) = atm_simulator::app::run(std::env::args()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

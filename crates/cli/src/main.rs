use docgen_core::ErrorReport;
use nu_ansi_term::Color;

fn main() {
    if let Err(e) = docgen_cli::run() {
        let report = ErrorReport::new(&*e);
        eprintln!("{} {}", Color::Red.bold().paint("error:"), report);
        std::process::exit(1);
    }
}

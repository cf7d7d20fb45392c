use qc_review_cli::run;

fn main() {
    if let Err(err) = run() {
        eprintln!("qc-review error: {err}");
        std::process::exit(err.exit_code());
    }
}

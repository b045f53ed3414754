mod assessment;
mod config;
#[cfg(target_arch = "wasm32")]
mod dom;
mod error;
#[cfg(not(target_arch = "wasm32"))]
mod preview;

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = dom::start() {
        dom::fail(&e);
    }
}

/// Off the browser: read answers as JSON on stdin and print the result card.
#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::io::Read;
    use std::process::ExitCode;

    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("career-assessment: failed to read stdin: {e}");
        return ExitCode::FAILURE;
    }

    match preview::render_preview(&input, &config::AssessmentConfig::default()) {
        Ok(html) => {
            print!("{html}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("career-assessment: {e}");
            ExitCode::FAILURE
        }
    }
}

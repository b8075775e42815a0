//! heliops main entrypoint.

use heliops::run;
use heliops::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

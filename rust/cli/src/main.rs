use std::io::{self, Write};

use crazyeights_cli::{config, logging, ui};

fn main() {
    let filter = config::load()
        .map(|cfg| cfg.log)
        .unwrap_or_else(|_| "warn".to_string());
    if let Err(e) = logging::init_logging(&filter) {
        let _ = ui::display_warning(&mut io::stderr(), &format!("logging disabled: {}", e));
    }

    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = crazyeights_cli::run(std::env::args(), &mut out, &mut err);
    let _ = out.flush();
    std::process::exit(code);
}

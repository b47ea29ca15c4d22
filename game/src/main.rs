//! Falling boxes demo entry point

use engine::prelude::*;
use tracing::{error, info};

fn main() {
    let app = DemoBuilder::new().build();

    let result = app.and_then(|app| {
        info!("Starting falling boxes demo");
        app.run()
    });

    match result {
        Ok(()) => info!("Demo closed"),
        Err(err) => {
            error!(error = %err, "Demo failed");
            std::process::exit(1);
        }
    }
}

use imgfetch::{fetch_and_save, logging, FetchError, FETCH_DIR};
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() {
    // Initialize logging as early as possible; never let it stop the tool.
    if let Err(err) = logging::init_logging() {
        eprintln!("imgfetch: file logging unavailable ({err:#}), using stderr");
        logging::init_logging_stderr();
    }

    println!("imgfetch - fetch images from the web into ./{}", FETCH_DIR);

    let dir = Path::new(FETCH_DIR);
    let stdin = io::stdin();

    loop {
        print!("Enter image URL (or 'quit' to exit): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break, // EOF or unreadable stdin ends the session
            Ok(_) => {}
        }

        let url = line.trim();
        if matches!(url.to_ascii_lowercase().as_str(), "quit" | "exit" | "q") {
            break;
        }
        if url.is_empty() {
            println!("Please enter a URL.");
            continue;
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            println!("URL must start with http:// or https://");
            continue;
        }

        match fetch_and_save(url, dir) {
            Ok(result) => {
                println!(
                    "Saved {} ({} bytes) to {}",
                    result.filename,
                    result.body.len(),
                    result.path.display()
                );
            }
            Err(FetchError::Network(e)) => {
                tracing::warn!("network failure for {}: {}", url, e);
                println!("Network error: {}. Nothing was saved.", e);
            }
            Err(FetchError::HttpStatus(code)) => {
                tracing::warn!("HTTP {} for {}", code, url);
                println!("Server responded with HTTP {}. Nothing was saved.", code);
            }
            Err(FetchError::Filesystem(e)) => {
                tracing::warn!("filesystem failure for {}: {}", url, e);
                println!("Filesystem error: {}.", e);
            }
        }
    }

    println!("Bye.");
}

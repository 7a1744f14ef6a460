//! The `trivia init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    if Path::new("trivia.toml").exists() {
        println!("trivia.toml already exists, skipping.");
    } else {
        std::fs::write("trivia.toml", SAMPLE_CONFIG)?;
        println!("Created trivia.toml");
    }

    std::fs::create_dir_all("banks")?;
    let bank_path = Path::new("banks/sample.toml");
    if bank_path.exists() {
        println!("banks/sample.toml already exists, skipping.");
    } else {
        std::fs::write(bank_path, SAMPLE_BANK)?;
        println!("Created banks/sample.toml");
    }

    println!("\nNext steps:");
    println!("  1. Point [sources.api] at your trivia backend, or keep playing locally");
    println!("  2. Run: trivia validate --bank banks/sample.toml");
    println!("  3. Run: trivia play --category Art");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# trivia configuration

default_source = "local"
max_retries = 3
retry_delay_ms = 500
# transcript_dir = "transcripts"

[sources.api]
type = "http"
base_url = "http://127.0.0.1:5000"
timeout_secs = 30

[sources.local]
type = "memory"
bank = "banks/sample.toml"
"#;

const SAMPLE_BANK: &str = r#"name = "Sample"

[[categories]]
id = 2
name = "Art"

[[categories]]
id = 3
name = "Geography"

[[questions]]
id = 16
question = "Which Dutch graphic artist, initials M C, was a creator of optical illusions?"
answer = "Escher"
difficulty = 1
category = 2

[[questions]]
id = 17
question = "La Giaconda is better known as what?"
answer = "Mona Lisa"
difficulty = 3
category = 2

[[questions]]
id = 18
question = "How many paintings did Van Gogh sell in his lifetime?"
answer = "One"
difficulty = 4
category = 2

[[questions]]
id = 19
question = "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?"
answer = "Jackson Pollock"
difficulty = 2
category = 2

[[questions]]
id = 13
question = "What is the largest lake in Africa?"
answer = "Lake Victoria"
difficulty = 2
category = 3

[[questions]]
id = 14
question = "In which royal palace would you find the Hall of Mirrors?"
answer = "The Palace of Versailles"
difficulty = 3
category = 3

[[questions]]
id = 15
question = "The Taj Mahal is located in which Indian city?"
answer = "Agra"
difficulty = 2
category = 3
"#;

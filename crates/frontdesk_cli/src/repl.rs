use std::io::{self, Write};

use colored::Colorize;

use reception::{Receptionist, FAREWELL};

/// Interactive terminal conversation, ended by "exit", "bye", or "goodbye".
pub async fn run(mut receptionist: Receptionist) -> anyhow::Result<()> {
    let greeting = receptionist.greet().await;
    println!("{} {greeting}", "Receptionist:".blue().bold());

    loop {
        print!("{} ", "Guest:".green().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line)?;
        let input = line.trim();

        // EOF or a farewell word ends the conversation
        if bytes == 0 || Receptionist::is_farewell(input) {
            println!("{} {FAREWELL}", "Receptionist:".blue().bold());
            break;
        }
        if input.is_empty() {
            continue;
        }

        println!("{}", "Let me check that for you...".dimmed());
        let reply = receptionist.reply(input).await;
        println!("{} {}", "Receptionist:".blue().bold(), reply.message);
    }

    Ok(())
}

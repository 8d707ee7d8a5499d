//! Hashes a password for provisioning accounts by hand, e.g. seeding the
//! first admin row.

use bcrypt::{DEFAULT_COST, hash};
use std::io::{self, BufRead, Write};

fn prompt_for_password() -> String {
    print!("Password: ");
    io::stdout().flush().expect("failed to flush stdout");

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .expect("failed to read password");
    line.trim_end().to_string()
}

fn main() {
    let password = std::env::args().nth(1).unwrap_or_else(prompt_for_password);
    let hashed = hash(password.as_bytes(), DEFAULT_COST).expect("failed to hash password");
    println!("{hashed}");
}

use std::io::{self, BufRead};

/// A numbered-choice console menu. Invalid input never escapes: the
/// prompt repeats until one of the listed choices is picked.
pub struct Menu<'a> {
    description: &'a str,
    choices: &'a [&'a str],
}

impl<'a> Menu<'a> {
    pub fn new(description: &'a str, choices: &'a [&'a str]) -> Self {
        Self {
            description,
            choices,
        }
    }

    /// Block until the user picks a valid choice; returns its index.
    /// A closed stdin counts as choosing to exit.
    pub fn prompt(&self) -> usize {
        loop {
            println!("{}", self.description);
            for (index, choice) in self.choices.iter().enumerate() {
                println!("({index}) {choice}");
            }

            let Some(input) = read_line() else {
                std::process::exit(0);
            };
            if let Some(choice) = parse_choice(&input, self.choices.len()) {
                return choice;
            }
            println!("Error: Try again");
        }
    }
}

fn parse_choice(input: &str, choices: usize) -> Option<usize> {
    let value = input.trim().parse::<usize>().ok()?;
    (value < choices).then_some(value)
}

/// Read one trimmed line from stdin; `None` once stdin is closed.
pub fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Prompt for one line of input.
pub fn ask(question: &str) -> Option<String> {
    println!("{question}");
    read_line()
}

/// Prompt for an integer; `None` on EOF or anything non-numeric.
pub fn ask_int(question: &str) -> Option<i32> {
    ask(question)?.parse().ok()
}

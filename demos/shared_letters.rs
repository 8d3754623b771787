use range_bitset::{AlphabetSet, BoundedSet, NotALetterError};

fn letters_of(word: &str) -> Result<AlphabetSet, NotALetterError> {
    let mut letters = AlphabetSet::new();
    for ch in word.chars() {
        letters.insert(ch)?;
    }
    Ok(letters)
}

fn main() -> Result<(), NotALetterError> {
    let first = letters_of("Compiler")?;
    let second = letters_of("Interpreter")?;

    let mut shared = first;
    let other: Vec<char> = second.iter().collect();
    shared.intersect_with(&other);

    print!("letters shared by \"Compiler\" and \"Interpreter\":");
    for letter in &shared {
        print!(" {letter}");
    }
    println!();
    Ok(())
}

use pcomb_core::{char_eq, digit, identifier, integer};

fn main() {
    let input = std::env::args().nth(1).unwrap_or_else(|| "width=80;depth=3".to_string());

    println!("Input: {:?}\n", input);

    let steps = [
        ("digits", digit().many().map(|ds| format!("{:?}", ds))),
        ("integer", integer().map(|n| n.to_string())),
        ("identifier", identifier()),
        ("'='", char_eq('=').map(String::from)),
    ];

    for (name, parser) in &steps {
        match parser.run(&input) {
            Some((value, rest)) => println!("  {:<10} => {:<12} {:?}", name, value, rest),
            None => println!("  {:<10} => no match", name),
        }
    }
}

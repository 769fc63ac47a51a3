use std::io::BufRead;

use pcomb_core::{char_eq, curry3, integer, map_apply, Parser};

fn multiply(x: i64, _op: char, y: i64) -> Option<i64> {
    x.checked_mul(y)
}

fn main() {
    let product: Parser<i64> = map_apply(curry3(multiply), &integer())
        .apply(&char_eq('*'))
        .apply(&integer())
        .filter_map(|product| product);

    // One expression per line, e.g. `echo 12*34 | cargo run --example multiply`
    for line in std::io::stdin().lock().lines().map_while(Result::ok) {
        match product.run_complete(line.trim_end()) {
            Ok(value) => println!("{} = {}", line.trim_end(), value),
            Err(err) => eprintln!("{:?}: {}", line, err),
        }
    }
}

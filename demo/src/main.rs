use std::any::Any;
use std::error::Error;
use std::fmt;

use optional::{optional, Optional};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct MissingGreeting;

impl fmt::Display for MissingGreeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no greeting configured")
    }
}

impl Error for MissingGreeting {}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    tracing::info!("running optional scenarios");

    let len = optional!["something"].map(str::len).get()?;
    println!("length of something: {len}");

    let empty: Optional<&str> = optional![];
    println!("{} or else: {}", empty, empty.or_else("fallback"));
    println!("{} or else: {}", optional!["v"], optional!["v"].or_else("fallback"));

    let words = ["hello", "", "world"];
    for w in words {
        let shouted = Optional::of(w)
            .filter(|w| !w.is_empty())
            .map(str::to_uppercase)
            .or(|| Optional::of(String::from("<blank>")));
        println!("{w:?} -> {shouted}");
    }

    // run with RUST_LOG=debug to see the contract violations being reported
    match Optional::of_checked(None::<&str>) {
        Ok(v) => println!("unexpected: {v}"),
        Err(e) => println!("of_checked(None): {e}"),
    }
    match optional![7u32].flat_map_checked::<u32, _>(Some(|x: u32| Box::new(x) as Box<dyn Any>)) {
        Ok(v) => println!("unexpected: {v}"),
        Err(e) => println!("flat_map_checked with a bare value: {e}"),
    }

    let greeting = Optional::<&str>::empty().or_else_throw(MissingGreeting);
    if let Err(e) = &greeting {
        println!("or_else_throw: {e}");
    }

    // the caller's error comes back as-is, so `?` propagates it unchanged
    let greeting = Optional::of("hi").or_else_throw(MissingGreeting)?;
    println!("greeting: {greeting}");

    Ok(())
}

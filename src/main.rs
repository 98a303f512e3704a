use anyhow::Result;
use circular_list::{List, ListError};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "circular-list-demo",
    about = "Walk a circular singly-linked list through every list operation"
)]
struct Cli {
    /// Initial values of the list.
    #[arg(allow_negative_numbers = true, default_values_t = [0, 1, 2])]
    values: Vec<i64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(values = ?cli.values, "starting demo");
    run(List::from(cli.values));
    Ok(())
}

fn report<T: std::fmt::Display>(label: &str, result: Result<T, ListError>) {
    match result {
        Ok(value) => println!("{label}: {value}"),
        Err(err) => println!("error: {err}"),
    }
}

fn position(found: Option<usize>) -> isize {
    found.map_or(-1, |i| i as isize)
}

fn run(mut l: List<i64>) {
    println!("{l}");
    println!("length = {}", l.len());

    println!("Appending 3 and 4");
    l.push_back(3);
    l.push_back(4);
    println!("{l}");

    println!("Inserting 69 at 3, -42, 42");
    for at in [3, -42, 42] {
        if let Err(err) = l.insert(at, 69) {
            println!("error: {err}");
        }
    }
    println!("{l}");

    println!("Deleting 69 at 3, -42, 42");
    for at in [3, -42, 42] {
        report("deleted", l.remove(at));
    }
    println!("{l}");

    println!("Getting 3, -42, 42");
    for at in [3, -42, 42] {
        report("got", l.get(at));
    }
    println!("{l}");

    println!("Cloning");
    let mut l2 = l.clone();
    println!("l:  {l}\nl2: {l2}");
    println!("Inserting 69 into l2 at 3");
    if let Err(err) = l2.insert(3, 69) {
        println!("error: {err}");
    }
    println!("l:  {l}\nl2: {l2}");

    println!("Extending l by l2");
    l.extend_from_list(&l2);
    println!("{l}");

    println!("Deleting all 0");
    l.remove_all(&0);
    println!("{l}");

    println!("first 2: {}", position(l.find_first(&2)));
    println!("first 42: {}", position(l.find_first(&42)));

    println!("last 2: {}", position(l.find_last(&2)));
    println!("last 42: {}", position(l.find_last(&42)));

    println!("Reversing");
    l.reverse();
    println!("{l}");

    println!("Clearing");
    l.clear();
    println!("{l}");
}

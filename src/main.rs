use anyhow::{Context, Result};
use clap::Parser;
use sixfold::Collection;

#[derive(Parser, Debug)]
#[command(name = "sixfold", about = "Print a list of values in all six traversal orders")]
struct Cli {
    /// Values to load into the collection, in insertion order.
    #[arg(required = true)]
    values: Vec<i64>,

    /// Remove every occurrence of this value before traversing.
    #[arg(long)]
    remove: Option<i64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut collection: Collection<i64> = cli.values.into_iter().collect();
    if let Some(value) = cli.remove {
        collection
            .remove(&value)
            .with_context(|| format!("cannot remove {value}"))?;
    }

    println!("size: {}", collection.size());
    println!("contents: {collection}");
    print_walk("order", collection.begin_order());
    print_walk("reverse order", collection.begin_reverse_order());
    print_walk("ascending order", collection.begin_ascending_order());
    print_walk("descending order", collection.begin_descending_order());
    print_walk("side-cross order", collection.begin_side_cross_order());
    print_walk("middle-out order", collection.begin_middle_out_order());

    Ok(())
}

fn print_walk<'a>(label: &str, cursor: impl Iterator<Item = &'a i64>) {
    let rendered: Vec<String> = cursor.map(|value| value.to_string()).collect();
    println!("{label}: [{}]", rendered.join(", "));
}
